//! Element-wise transforms into types and into `const` values.

use core::convert::Infallible;
use crate::func::{Call, Callable};
use crate::primitives::{Peano, Value, S, Z};
use super::node::{Cons, Nil, TypeList};

// =============================================================================
// Into types
// =============================================================================

/// Element `i` becomes `Call<F, Ti, i, Acc>`, where `Acc` holds the
/// already-transformed prefix.
///
/// ```
/// use tola_typelist::prelude::*;
///
/// type L = typelist![u8, i32];
/// assert_type_eq!(<L as TransformTypes<PointerTo>>::Out, typelist![*const u8, *const i32]);
/// ```
pub trait TransformTypes<F> {
    type Out: TypeList;
}

impl<L, F> TransformTypes<F> for L
where
    L: TransformFrom<F, Z, Nil>,
{
    type Out = <L as TransformFrom<F, Z, Nil>>::Out;
}

#[doc(hidden)]
pub trait TransformFrom<F, I, Acc> {
    type Out: TypeList;
}

impl<F, I, Acc: TypeList> TransformFrom<F, I, Acc> for Nil {
    type Out = Acc;
}

impl<H, T, F, I, Acc> TransformFrom<F, I, Acc> for Cons<H, T>
where
    I: Peano,
    Acc: TypeList,
    F: Callable<H, I, Acc>,
    T: TransformFrom<F, S<I>, Acc::PushBack<Call<F, H, I, Acc>>>,
{
    type Out = <T as TransformFrom<F, S<I>, Acc::PushBack<Call<F, H, I, Acc>>>>::Out;
}

// =============================================================================
// Into values
// =============================================================================

/// `F` applied to every element, as a `const` array in list order.
///
/// Every call must yield a [`Value`] of the same `Type`; the element type
/// of the array is taken from the first element. `N` must equal the list
/// length, which is checked when `VALUES` is evaluated.
///
/// ```
/// use tola_typelist::prelude::*;
///
/// type L = typelist![u8, u32, u16];
/// const SIZES: [usize; 3] = <L as TransformValues<SizeOf, 3>>::VALUES;
/// assert_eq!(SIZES, [1, 4, 2]);
/// ```
///
/// ```compile_fail
/// use tola_typelist::prelude::*;
///
/// type L = typelist![u8, u32, u16];
/// const SIZES: [usize; 2] = <L as TransformValues<SizeOf, 2>>::VALUES;
/// ```
///
/// Mixing value types does not compile:
///
/// ```compile_fail
/// use tola_typelist::prelude::*;
///
/// struct Mixed;
/// impl Func for Mixed {
///     type Shape = ByType;
/// }
/// impl TypeFn<u8> for Mixed {
///     type Out = True;
/// }
/// impl TypeFn<u16> for Mixed {
///     type Out = D1;
/// }
///
/// type L = typelist![u8, u16];
/// const MIXED: [bool; 2] = <L as TransformValues<Mixed, 2>>::VALUES;
/// ```
pub trait TransformValues<F, const N: usize> {
    type Value: Copy;
    const VALUES: [Self::Value; N];
}

impl<F> TransformValues<F, 0> for Nil {
    type Value = Infallible;
    const VALUES: [Infallible; 0] = [];
}

type Head<F, H> = Call<F, H, Z, Nil>;
type HeadValue<F, H> = <Head<F, H> as Value>::Type;

impl<H, T, F, const N: usize> TransformValues<F, N> for Cons<H, T>
where
    T: TypeList,
    F: Callable<H, Z, Nil>,
    Head<F, H>: Value,
    Self: Tabulate<F, HeadValue<F, H>, Head<F, H>, Z, Nil, N>,
{
    type Value = HeadValue<F, H>;
    const VALUES: [Self::Value; N] = {
        assert!(N == <Self as TypeList>::LEN, "TransformValues: N must equal the list length");
        <Self as Tabulate<F, HeadValue<F, H>, Head<F, H>, Z, Nil, N>>::TABLE
    };
}

/// Writes the value of element `I..` into its slot of an `N`-slot table
/// whose slots start out as `Seed::VALUE`.
#[doc(hidden)]
pub trait Tabulate<F, V: Copy, Seed, I, Acc, const N: usize> {
    const TABLE: [V; N];
}

impl<F, V, Seed, I, Acc, const N: usize> Tabulate<F, V, Seed, I, Acc, N> for Nil
where
    V: Copy,
    Seed: Value<Type = V>,
{
    const TABLE: [V; N] = [Seed::VALUE; N];
}

impl<H, T, F, V, Seed, I, Acc, const N: usize> Tabulate<F, V, Seed, I, Acc, N> for Cons<H, T>
where
    V: Copy,
    I: Peano,
    Acc: TypeList,
    F: Callable<H, I, Acc>,
    Call<F, H, I, Acc>: Value<Type = V>,
    T: Tabulate<F, V, Seed, S<I>, Acc::PushBack<H>, N>,
{
    const TABLE: [V; N] = {
        let mut table = <T as Tabulate<F, V, Seed, S<I>, Acc::PushBack<H>, N>>::TABLE;
        table[I::VALUE] = <Call<F, H, I, Acc> as Value>::VALUE;
        table
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::{IndexOf, PointerTo, SizeOf};
    use crate::primitives::{D0, D1, D2};

    type L = crate::typelist![u8, f64, u16];

    #[test]
    fn test_types() {
        crate::assert_type_eq!(
            <L as TransformTypes<PointerTo>>::Out,
            crate::typelist![*const u8, *const f64, *const u16]
        );
        crate::assert_type_eq!(<L as TransformTypes<IndexOf>>::Out, crate::typelist![D0, D1, D2]);
        crate::assert_type_eq!(<Nil as TransformTypes<PointerTo>>::Out, Nil);
    }

    #[test]
    fn test_values() {
        assert_eq!(<L as TransformValues<SizeOf, 3>>::VALUES, [1, 8, 2]);
        assert_eq!(<L as TransformValues<IndexOf, 3>>::VALUES, [0, 1, 2]);
        assert_eq!(<Nil as TransformValues<SizeOf, 0>>::VALUES.len(), 0);
    }
}
