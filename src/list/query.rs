//! Lookups and boolean reductions.
//!
//! Traversals start at index `D0` with an empty context and pass the
//! visited prefix as context to each predicate call.

use crate::func::{Predicate, Test};
use crate::identity::{NoType, SameAs};
use crate::primitives::{Bool, False, Peano, True, Value, S, Z};
use super::node::{Cons, Nil, TypeList};

// =============================================================================
// Membership
// =============================================================================

/// `U` occurs in `Self`.
pub trait Has<U> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Value>::VALUE;
}

impl<U> Has<U> for Nil {
    type Out = False;
}

impl<H, T, U> Has<U> for Cons<H, T>
where
    H: SameAs<U>,
    T: Has<U>,
{
    type Out = <<H as SameAs<U>>::Out as Bool>::Or<<T as Has<U>>::Out>;
}

/// Every element of the list `Us` occurs in `Self`.
///
/// Multiplicity is ignored: `[u8]` contains `[u8, u8]`.
pub trait Contains<Us> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Value>::VALUE;
}

impl<L> Contains<Nil> for L {
    type Out = True;
}

impl<L, U, Us> Contains<Cons<U, Us>> for L
where
    L: Has<U> + Contains<Us>,
{
    type Out = <<L as Has<U>>::Out as Bool>::And<<L as Contains<Us>>::Out>;
}

// =============================================================================
// Indexing
// =============================================================================

/// The element at Peano index `I`.
///
/// ```compile_fail
/// use tola_typelist::prelude::*;
///
/// type L = typelist![u8, u16];
/// let _: Option<At<L, 2>> = None;
/// ```
#[diagnostic::on_unimplemented(
    message = "index `{I}` is out of range for `{Self}`",
    label = "no element at this index",
    note = "indices are 0-based and must be smaller than the list length"
)]
pub trait Get<I> {
    type Out;
}

impl<H, T> Get<Z> for Cons<H, T> {
    type Out = H;
}

impl<H, T, N> Get<S<N>> for Cons<H, T>
where
    T: Get<N>,
{
    type Out = <T as Get<N>>::Out;
}

// =============================================================================
// Search
// =============================================================================

/// The first element accepted by `P`, or [`NoType`].
pub trait FindIf<P> {
    type Out;
}

impl<L, P> FindIf<P> for L
where
    L: FindFrom<P, Z, Nil>,
{
    type Out = <L as FindFrom<P, Z, Nil>>::Out;
}

/// `FindIf` from index `I` with visited prefix `Acc`.
#[doc(hidden)]
pub trait FindFrom<P, I, Acc> {
    type Out;
}

impl<P, I, Acc> FindFrom<P, I, Acc> for Nil {
    type Out = NoType;
}

impl<H, T, P, I, Acc> FindFrom<P, I, Acc> for Cons<H, T>
where
    I: Peano,
    Acc: TypeList,
    P: Predicate<H, I, Acc>,
    T: FindFrom<P, S<I>, Acc::PushBack<H>>,
{
    type Out = <Test<P, H, I, Acc> as Bool>::If<H, <T as FindFrom<P, S<I>, Acc::PushBack<H>>>::Out>;
}

// =============================================================================
// Reductions
// =============================================================================

/// Some element is accepted by `P`. `False` for the empty list.
pub trait AnyOf<P> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Value>::VALUE;
}

/// Every element is accepted by `P`. `True` for the empty list.
pub trait AllOf<P> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Value>::VALUE;
}

/// No element is accepted by `P`. `True` for the empty list.
pub trait NoneOf<P> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Value>::VALUE;
}

#[doc(hidden)]
pub trait AnyFrom<P, I, Acc> {
    type Out: Bool;
}

#[doc(hidden)]
pub trait AllFrom<P, I, Acc> {
    type Out: Bool;
}

impl<P, I, Acc> AnyFrom<P, I, Acc> for Nil {
    type Out = False;
}

impl<P, I, Acc> AllFrom<P, I, Acc> for Nil {
    type Out = True;
}

impl<H, T, P, I, Acc> AnyFrom<P, I, Acc> for Cons<H, T>
where
    I: Peano,
    Acc: TypeList,
    P: Predicate<H, I, Acc>,
    T: AnyFrom<P, S<I>, Acc::PushBack<H>>,
{
    type Out = <Test<P, H, I, Acc> as Bool>::Or<<T as AnyFrom<P, S<I>, Acc::PushBack<H>>>::Out>;
}

impl<H, T, P, I, Acc> AllFrom<P, I, Acc> for Cons<H, T>
where
    I: Peano,
    Acc: TypeList,
    P: Predicate<H, I, Acc>,
    T: AllFrom<P, S<I>, Acc::PushBack<H>>,
{
    type Out = <Test<P, H, I, Acc> as Bool>::And<<T as AllFrom<P, S<I>, Acc::PushBack<H>>>::Out>;
}

impl<L: AnyFrom<P, Z, Nil>, P> AnyOf<P> for L {
    type Out = <L as AnyFrom<P, Z, Nil>>::Out;
}

impl<L: AllFrom<P, Z, Nil>, P> AllOf<P> for L {
    type Out = <L as AllFrom<P, Z, Nil>>::Out;
}

impl<L: AnyFrom<P, Z, Nil>, P> NoneOf<P> for L {
    type Out = <<L as AnyFrom<P, Z, Nil>>::Out as Bool>::Not;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::{Always, IsType, Never};
    use crate::primitives::{D0, D2};

    type L = crate::typelist![u8, i32, u8, f64];

    #[test]
    fn test_membership() {
        assert!(<L as Has<i32>>::VALUE);
        assert!(!<L as Has<u16>>::VALUE);
        assert!(!<Nil as Has<u8>>::VALUE);
        assert!(<L as Contains<crate::typelist![f64, u8, u8]>>::VALUE);
        assert!(!<L as Contains<crate::typelist![f64, u16]>>::VALUE);
        assert!(<Nil as Contains<Nil>>::VALUE);
    }

    #[test]
    fn test_get() {
        crate::assert_type_eq!(<L as Get<D0>>::Out, u8);
        crate::assert_type_eq!(<L as Get<D2>>::Out, u8);
        crate::assert_type_eq!(<L as Get<crate::primitives::D3>>::Out, f64);
    }

    #[test]
    fn test_reductions() {
        assert!(<L as AnyOf<IsType<f64>>>::VALUE);
        assert!(!<L as AllOf<IsType<u8>>>::VALUE);
        assert!(<L as NoneOf<IsType<char>>>::VALUE);
        assert!(!<Nil as AnyOf<Always>>::VALUE);
        assert!(<Nil as AllOf<Never>>::VALUE);
        assert!(<Nil as NoneOf<Always>>::VALUE);
    }

    #[test]
    fn test_find() {
        crate::assert_type_eq!(<L as FindIf<IsType<f64>>>::Out, f64);
        crate::assert_type_eq!(<L as FindIf<Never>>::Out, NoType);
        crate::assert_type_eq!(<Nil as FindIf<Always>>::Out, NoType);
    }
}
