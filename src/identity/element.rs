//! Element identity and storage size.

use crate::primitives::{Bool, Number, U0};
use super::tree::{Identity, IdentityEq};

/// A type that can be compared with other types at the type level.
///
/// Use `#[derive(Element)]` for your own types. Everything that takes part
/// in `Has`, `Contains`, `Distinct` or `IsType` must implement it.
///
/// The derive does not take const generic parameters:
///
/// ```compile_fail
/// use tola_typelist::Element;
///
/// #[derive(Element)]
/// struct Buffer<const N: usize>([u8; N]);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no type-level identity",
    label = "not an `Element`",
    note = "add `#[derive(Element)]` to the type, or implement `Element` by hand"
)]
pub trait Element {
    type Id: Identity;
}

/// Byte size of a type, as a type-level `Number`.
///
/// Drives the default `BySize` comparator.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no type-level storage size",
    label = "cannot be ordered by size",
    note = "`#[derive(Element)]` provides `StorageSize` for non-generic types; generic types must implement it by hand"
)]
pub trait StorageSize {
    type Size: Number;
}

/// `Self` and `U` are the same type.
///
/// Answers with a `Bool` rather than failing, so it can be used inside
/// predicates.
pub trait SameAs<U> {
    type Out: Bool;
}

impl<T, U> SameAs<U> for T
where
    T: Element,
    U: Element,
    T::Id: IdentityEq<U::Id>,
{
    type Out = <T::Id as IdentityEq<U::Id>>::Out;
}

/// "Not found": what `FindIf` yields when no element matches.
///
/// Uninhabited, and its identity is reserved, so comparing a result
/// against it with `SameAs` or `assert_type_eq!` is the way to detect
/// absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoType {}

impl Element for NoType {
    type Id = crate::__atom!("tola_typelist::<no type>");
}

impl StorageSize for NoType {
    type Size = U0;
}
