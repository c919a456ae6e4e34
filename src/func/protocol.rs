//! Invocation protocol.
//!
//! A type-level function is a zero-sized marker. It declares its call
//! shape through `Func::Shape` and implements the one trait that shape
//! names:
//!
//! | Shape | Trait | Arguments |
//! |-------|-------|-----------|
//! | `ByType` | `TypeFn<T>` | element |
//! | `ByIndex` | `IndexFn<T, I>` | element, Peano index |
//! | `ByContext` | `ContextFn<T, I, Acc>` | element, index, context list |
//!
//! Combinators always supply all three arguments; `Invoke` forwards the
//! ones the shape asks for. The context is whatever the traversal has
//! built so far (kept elements for `Filter`, the transformed prefix for
//! `TransformTypes`, the visited prefix elsewhere).
//!
//! ```ignore
//! struct IsWide;
//! impl Func for IsWide { type Shape = ByType; }
//! impl<T: StorageSize> TypeFn<T> for IsWide {
//!     type Out = <__num!(4) as Number>::Lt<T::Size>;
//! }
//! ```

use crate::primitives::Bool;

/// Shape tag: called with the element only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByType;

/// Shape tag: called with the element and its index.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByIndex;

/// Shape tag: called with the element, its index and the context list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByContext;

/// A type-level function or predicate.
///
/// Anything else is rejected where it is first used:
///
/// ```compile_fail
/// use tola_typelist::prelude::*;
///
/// struct NotAFunction;
/// let _: Option<Filtered<typelist![u8], NotAFunction>> = None;
/// ```
///
/// So is a function whose impl does not match its declared shape:
///
/// ```compile_fail
/// use tola_typelist::prelude::*;
///
/// struct Mismatched;
/// impl Func for Mismatched { type Shape = ByIndex; }
/// impl<T> TypeFn<T> for Mismatched { type Out = True; }
///
/// let _: Option<Filtered<typelist![u8], Mismatched>> = None;
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type-level function",
    label = "missing `Func` impl",
    note = "implement `Func` with `type Shape = ByType`, `ByIndex` or `ByContext`, then the matching `TypeFn`, `IndexFn` or `ContextFn`"
)]
pub trait Func {
    type Shape;
}

/// Shape (a): `F(T)`.
pub trait TypeFn<T> {
    type Out;
}

/// Shape (b): `F(T, I)` with `I` a Peano index.
pub trait IndexFn<T, I> {
    type Out;
}

/// Shape (c): `F(T, I, Acc)` with `Acc` a type list.
pub trait ContextFn<T, I, Acc> {
    type Out;
}

/// Dispatch from a shape tag to the function's implementation.
#[diagnostic::on_unimplemented(
    message = "`{F}` cannot be called with element `{T}`",
    label = "shape `{Self}` declared here has no matching impl",
    note = "`ByType` needs `TypeFn<T>`, `ByIndex` needs `IndexFn<T, I>`, `ByContext` needs `ContextFn<T, I, Acc>`"
)]
pub trait Invoke<F, T, I, Acc> {
    type Out;
}

impl<F, T, I, Acc> Invoke<F, T, I, Acc> for ByType
where
    F: TypeFn<T>,
{
    type Out = F::Out;
}

impl<F, T, I, Acc> Invoke<F, T, I, Acc> for ByIndex
where
    F: IndexFn<T, I>,
{
    type Out = F::Out;
}

impl<F, T, I, Acc> Invoke<F, T, I, Acc> for ByContext
where
    F: ContextFn<T, I, Acc>,
{
    type Out = F::Out;
}

/// `F` can be called with `(T, I, Acc)` through its declared shape.
pub trait Callable<T, I, Acc> {
    type Out;
}

impl<F, T, I, Acc> Callable<T, I, Acc> for F
where
    F: Func,
    F::Shape: Invoke<F, T, I, Acc>,
{
    type Out = <F::Shape as Invoke<F, T, I, Acc>>::Out;
}

/// Result of calling `F` on `(T, I, Acc)`.
pub type Call<F, T, I, Acc> = <F as Callable<T, I, Acc>>::Out;

/// A callable whose result is a type-level `Bool`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a predicate for element `{T}`",
    note = "a predicate is a `Func` whose `Out` implements `Bool` (`True` or `False`)"
)]
pub trait Predicate<T, I, Acc> {
    type Out: Bool;
}

impl<P, T, I, Acc> Predicate<T, I, Acc> for P
where
    P: Callable<T, I, Acc>,
    <P as Callable<T, I, Acc>>::Out: Bool,
{
    type Out = <P as Callable<T, I, Acc>>::Out;
}

/// Result of testing `P` on `(T, I, Acc)`.
pub type Test<P, T, I, Acc> = <P as Predicate<T, I, Acc>>::Out;
