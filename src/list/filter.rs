//! Filtering and everything built on it.
//!
//! `Filter` threads the kept elements through the traversal and hands them
//! to the predicate as context. `Distinct` and `Slice` are just filters
//! with a particular predicate.

use crate::func::{InRange, Predicate, Test, Unseen};
use crate::primitives::{Bool, NotAfter, Peano, S, Z};
use super::node::{Cons, Nil, TypeList};

/// The elements accepted by `P`, in their original order.
pub trait Filter<P> {
    type Out: TypeList;
}

impl<L, P> Filter<P> for L
where
    L: FilterFrom<P, Z, Nil>,
{
    type Out = <L as FilterFrom<P, Z, Nil>>::Out;
}

/// `Filter` from index `I` with the kept elements `Acc`.
#[doc(hidden)]
pub trait FilterFrom<P, I, Acc> {
    type Out: TypeList;
}

impl<P, I, Acc: TypeList> FilterFrom<P, I, Acc> for Nil {
    type Out = Acc;
}

type Kept<P, H, I, Acc> = <Test<P, H, I, Acc> as Bool>::If<<Acc as TypeList>::PushBack<H>, Acc>;

impl<H, T, P, I, Acc> FilterFrom<P, I, Acc> for Cons<H, T>
where
    I: Peano,
    Acc: TypeList,
    P: Predicate<H, I, Acc>,
    T: FilterFrom<P, S<I>, Kept<P, H, I, Acc>>,
{
    type Out = <T as FilterFrom<P, S<I>, Kept<P, H, I, Acc>>>::Out;
}

/// First occurrences only, in their original order.
///
/// ```
/// use tola_typelist::prelude::*;
///
/// type L = typelist![f64, f32, i32, u8, i32, u8, f32, f64];
/// assert_type_eq!(<L as Distinct>::Out, typelist![f64, f32, i32, u8]);
/// ```
pub trait Distinct {
    type Out: TypeList;
}

impl<L: Filter<Unseen>> Distinct for L {
    type Out = <L as Filter<Unseen>>::Out;
}

/// Elements with index in `[From, To)`.
///
/// Requires `From <= To <= LEN`; anything else does not compile.
///
/// ```compile_fail
/// use tola_typelist::prelude::*;
///
/// type L = typelist![u8, u16];
/// type Bad = Sliced<L, 1, 3>;
/// let _: Option<Bad> = None;
/// ```
///
/// ```compile_fail
/// use tola_typelist::prelude::*;
///
/// type L = typelist![u8, u16, u32];
/// type Backwards = Sliced<L, 2, 1>;
/// let _: Option<Backwards> = None;
/// ```
pub trait Slice<From, To> {
    type Out: TypeList;
}

impl<L, From, To> Slice<From, To> for L
where
    L: TypeList + Filter<InRange<From, To>>,
    From: NotAfter<To>,
    To: NotAfter<L::Len>,
{
    type Out = <L as Filter<InRange<From, To>>>::Out;
}
