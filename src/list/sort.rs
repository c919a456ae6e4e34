//! Stable bubble sort.
//!
//! One `BubblePass` walks adjacent pairs `(a, b)` and swaps them iff
//! `C(b, a) && !C(a, b)`. `Sort` repeats passes until one reports no swap;
//! the next pass is only requested through the `Swapped` flag, so the
//! recursion stops on its own. Equivalent elements are never swapped,
//! which makes the sort stable and a sorted list a fixed point.

use crate::func::{BySize, Precedes};
use crate::primitives::{Bool, False, True};
use super::node::{Cons, Nil, TypeList};

/// `Self` ordered by the comparator `C` (ascending storage size by default).
///
/// ```
/// use tola_typelist::prelude::*;
///
/// type L = typelist![u64, u8, u32, u8];
/// assert_type_eq!(<L as Sort>::Out, typelist![u8, u8, u32, u64]);
/// assert_type_eq!(<L as Sort<BySizeDesc>>::Out, typelist![u64, u32, u8, u8]);
/// ```
pub trait Sort<C = BySize> {
    type Out: TypeList;
}

impl<L, C> Sort<C> for L
where
    L: BubblePass<C>,
    <L as BubblePass<C>>::Swapped: Resort<<L as BubblePass<C>>::Out, C>,
{
    type Out = <<L as BubblePass<C>>::Swapped as Resort<<L as BubblePass<C>>::Out, C>>::Out;
}

/// One pass over adjacent pairs.
pub trait BubblePass<C> {
    type Out: TypeList;
    /// Whether the pass swapped anything.
    type Swapped: Bool;
}

impl<C> BubblePass<C> for Nil {
    type Out = Nil;
    type Swapped = False;
}

impl<C, A> BubblePass<C> for Cons<A, Nil> {
    type Out = Cons<A, Nil>;
    type Swapped = False;
}

type SwapNeeded<C, A, B> =
    <<C as Precedes<B, A>>::Out as Bool>::And<<<C as Precedes<A, B>>::Out as Bool>::Not>;

impl<C, A, B, R> BubblePass<C> for Cons<A, Cons<B, R>>
where
    C: Precedes<B, A> + Precedes<A, B>,
    SwapNeeded<C, A, B>: PassStep<C, A, B, R>,
{
    type Out = <SwapNeeded<C, A, B> as PassStep<C, A, B, R>>::Out;
    type Swapped = <SwapNeeded<C, A, B> as PassStep<C, A, B, R>>::Swapped;
}

/// The rest of a pass after deciding on the pair `(A, B)`.
#[doc(hidden)]
pub trait PassStep<C, A, B, R> {
    type Out: TypeList;
    type Swapped: Bool;
}

impl<C, A, B, R> PassStep<C, A, B, R> for True
where
    Cons<A, R>: BubblePass<C>,
{
    type Out = Cons<B, <Cons<A, R> as BubblePass<C>>::Out>;
    type Swapped = True;
}

impl<C, A, B, R> PassStep<C, A, B, R> for False
where
    Cons<B, R>: BubblePass<C>,
{
    type Out = Cons<A, <Cons<B, R> as BubblePass<C>>::Out>;
    type Swapped = <Cons<B, R> as BubblePass<C>>::Swapped;
}

/// Another full sort after a pass that swapped, otherwise done.
#[doc(hidden)]
pub trait Resort<L, C> {
    type Out: TypeList;
}

impl<L: TypeList, C> Resort<L, C> for False {
    type Out = L;
}

impl<L: Sort<C>, C> Resort<L, C> for True {
    type Out = <L as Sort<C>>::Out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::{BySizeDesc, Reverse};

    #[test]
    fn test_single_pass() {
        type L = crate::typelist![u32, u8, u16];
        crate::assert_type_eq!(<L as BubblePass<BySize>>::Out, crate::typelist![u8, u16, u32]);
        assert!(<<L as BubblePass<BySize>>::Swapped as crate::primitives::Value>::VALUE);
    }

    #[test]
    fn test_sort() {
        type L = crate::typelist![f64, f32, i32, u8, i32, u8, f32, f64];
        type Sorted = <L as Sort>::Out;
        crate::assert_type_eq!(Sorted, crate::typelist![u8, u8, f32, i32, i32, f32, f64, f64]);
        crate::assert_type_eq!(<Sorted as Sort>::Out, Sorted);
    }

    #[test]
    fn test_other_comparators() {
        type L = crate::typelist![u16, u8, i16, u64];
        crate::assert_type_eq!(<L as Sort<BySizeDesc>>::Out, crate::typelist![u64, u16, i16, u8]);
        crate::assert_type_eq!(<L as Sort<Reverse<BySize>>>::Out, crate::typelist![u64, u16, i16, u8]);
        crate::assert_type_eq!(<Nil as Sort>::Out, Nil);
    }
}
