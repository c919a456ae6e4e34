//! Built-in predicates.

use core::marker::PhantomData;
use crate::identity::SameAs;
use crate::list::Has;
use crate::primitives::{Bool, False, Peano, True};
use super::protocol::{ByContext, ByIndex, ByType, ContextFn, Func, IndexFn, Predicate, TypeFn};

/// Accepts every element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl Func for Always {
    type Shape = ByType;
}

impl<T> TypeFn<T> for Always {
    type Out = True;
}

/// Rejects every element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Func for Never {
    type Shape = ByType;
}

impl<T> TypeFn<T> for Never {
    type Out = False;
}

// =============================================================================
// Combinators
// =============================================================================
//
// Combinators take the full context shape and call each operand through
// its own declared shape, so any mix of shapes composes.

/// `!P`
#[derive(Debug)]
pub struct Negate<P>(PhantomData<P>);

impl<P> Func for Negate<P> {
    type Shape = ByContext;
}

impl<P, T, I, Acc> ContextFn<T, I, Acc> for Negate<P>
where
    P: Predicate<T, I, Acc>,
{
    type Out = <<P as Predicate<T, I, Acc>>::Out as Bool>::Not;
}

/// `P && Q`
#[derive(Debug)]
pub struct Both<P, Q>(PhantomData<(P, Q)>);

impl<P, Q> Func for Both<P, Q> {
    type Shape = ByContext;
}

impl<P, Q, T, I, Acc> ContextFn<T, I, Acc> for Both<P, Q>
where
    P: Predicate<T, I, Acc>,
    Q: Predicate<T, I, Acc>,
{
    type Out = <<P as Predicate<T, I, Acc>>::Out as Bool>::And<<Q as Predicate<T, I, Acc>>::Out>;
}

/// `P || Q`
#[derive(Debug)]
pub struct Either<P, Q>(PhantomData<(P, Q)>);

impl<P, Q> Func for Either<P, Q> {
    type Shape = ByContext;
}

impl<P, Q, T, I, Acc> ContextFn<T, I, Acc> for Either<P, Q>
where
    P: Predicate<T, I, Acc>,
    Q: Predicate<T, I, Acc>,
{
    type Out = <<P as Predicate<T, I, Acc>>::Out as Bool>::Or<<Q as Predicate<T, I, Acc>>::Out>;
}

// =============================================================================
// By type
// =============================================================================

/// The element is `U`.
#[derive(Debug)]
pub struct IsType<U>(PhantomData<U>);

impl<U> Func for IsType<U> {
    type Shape = ByType;
}

impl<U, T> TypeFn<T> for IsType<U>
where
    T: SameAs<U>,
{
    type Out = <T as SameAs<U>>::Out;
}

type IntegralTypes = crate::typelist![u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize];
type FloatTypes = crate::typelist![f32, f64];

/// The element is one of Rust's integer primitives (`u8..=u128`,
/// `i8..=i128`, `usize`, `isize`).
///
/// `bool` and `char` are not integers here.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsIntegral;

impl Func for IsIntegral {
    type Shape = ByType;
}

impl<T> TypeFn<T> for IsIntegral
where
    IntegralTypes: Has<T>,
{
    type Out = <IntegralTypes as Has<T>>::Out;
}

/// The element is `f32` or `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsFloat;

impl Func for IsFloat {
    type Shape = ByType;
}

impl<T> TypeFn<T> for IsFloat
where
    FloatTypes: Has<T>,
{
    type Out = <FloatTypes as Has<T>>::Out;
}

// =============================================================================
// By index
// =============================================================================

/// The element sits at index `N`.
#[derive(Debug)]
pub struct IndexIs<N>(PhantomData<N>);

impl<N> Func for IndexIs<N> {
    type Shape = ByIndex;
}

impl<N: Peano, T, I: Peano> IndexFn<T, I> for IndexIs<N> {
    type Out = <<I as Peano>::Le<N> as Bool>::And<<N as Peano>::Le<I>>;
}

/// The element's index lies in `[From, To)`.
#[derive(Debug)]
pub struct InRange<From, To>(PhantomData<(From, To)>);

impl<From, To> Func for InRange<From, To> {
    type Shape = ByIndex;
}

impl<From: Peano, To: Peano, T, I: Peano> IndexFn<T, I> for InRange<From, To> {
    type Out = <<From as Peano>::Le<I> as Bool>::And<<I as Peano>::Lt<To>>;
}

// =============================================================================
// By context
// =============================================================================

/// The element does not occur in the context list.
///
/// As a `Filter` predicate the context is the kept prefix, which makes
/// `Filter<Unseen>` keep first occurrences only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unseen;

impl Func for Unseen {
    type Shape = ByContext;
}

impl<T, I, Acc> ContextFn<T, I, Acc> for Unseen
where
    Acc: Has<T>,
{
    type Out = <<Acc as Has<T>>::Out as Bool>::Not;
}
