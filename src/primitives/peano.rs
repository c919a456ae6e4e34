//! Peano numbers, used as list indices and lengths.

use core::marker::PhantomData;
use super::bool::{Bool, False, True};
use super::value::Value;

/// Peano number trait
pub trait Peano: Value<Type = usize> + 'static {
    /// `Self - 1`, saturating at zero.
    type Pred: Peano;
    type IsZero: Bool;
    /// `Self < O`
    type Lt<O: Peano>: Bool;
    /// `Self <= O`
    type Le<O: Peano>: Bool;
}

/// Zero (base case)
#[derive(Debug)]
pub struct Z;

/// Successor (S<N> = N + 1)
#[derive(Debug)]
pub struct S<N>(PhantomData<N>);

impl Value for Z {
    type Type = usize;
    const VALUE: usize = 0;
}

impl Peano for Z {
    type Pred = Z;
    type IsZero = True;
    type Lt<O: Peano> = <O::IsZero as Bool>::Not;
    type Le<O: Peano> = True;
}

impl<N: Peano> Value for S<N> {
    type Type = usize;
    const VALUE: usize = N::VALUE + 1;
}

impl<N: Peano> Peano for S<N> {
    type Pred = N;
    type IsZero = False;
    type Lt<O: Peano> = <O::IsZero as Bool>::Elif<False, N::Lt<O::Pred>>;
    type Le<O: Peano> = <<O as Peano>::Lt<S<N>> as Bool>::Not;
}

// Generate D0..D64 using proc-macro
macros::peano!(64);

/// `A <= B`, as a bound.
///
/// Implemented only when it holds, so a violated bound is a compile error
/// rather than a `False`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is greater than `{B}`",
    label = "bound violated here",
    note = "slice bounds must satisfy FROM <= TO <= LEN"
)]
pub trait NotAfter<B> {}

impl<B> NotAfter<B> for Z {}

impl<A, B> NotAfter<S<B>> for S<A> where A: NotAfter<B> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(<D0 as Value>::VALUE, 0);
        assert_eq!(<D7 as Value>::VALUE, 7);
        assert_eq!(<D64 as Value>::VALUE, 64);
    }

    #[test]
    fn test_ordering() {
        assert!(<<D2 as Peano>::Lt<D5> as Value>::VALUE);
        assert!(!<<D5 as Peano>::Lt<D2> as Value>::VALUE);
        assert!(!<<D3 as Peano>::Lt<D3> as Value>::VALUE);
        assert!(<<D3 as Peano>::Le<D3> as Value>::VALUE);
        assert!(<<D0 as Peano>::Lt<D1> as Value>::VALUE);
        assert!(!<<D0 as Peano>::Lt<D0> as Value>::VALUE);
    }

    fn ordered<A: NotAfter<B>, B>() {}

    #[test]
    fn test_not_after_bound() {
        ordered::<D0, D0>();
        ordered::<D2, D4>();
        ordered::<D4, D4>();
    }
}
