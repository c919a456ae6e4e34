//! Comparators for `Sort`.

use core::marker::PhantomData;
use crate::identity::StorageSize;
use crate::primitives::{Bool, Number};

/// Strict weak ordering: `Out` is `True` iff `A` goes strictly before `B`.
///
/// `Out` must be a type-level boolean:
///
/// ```compile_fail
/// use tola_typelist::prelude::*;
///
/// struct ByName;
/// impl Precedes<u8, u16> for ByName {
///     type Out = u8;
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot order `{A}` against `{B}`",
    label = "not a comparator for these elements",
    note = "a comparator implements `Precedes<A, B>` with `Out: Bool`; `BySize` needs `StorageSize` on every element"
)]
pub trait Precedes<A, B> {
    type Out: Bool;
}

/// Ascending storage size. The default for `Sort`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BySize;

impl<A: StorageSize, B: StorageSize> Precedes<A, B> for BySize {
    type Out = <A::Size as Number>::Lt<B::Size>;
}

/// Descending storage size.
#[derive(Debug, Clone, Copy, Default)]
pub struct BySizeDesc;

impl<A: StorageSize, B: StorageSize> Precedes<A, B> for BySizeDesc {
    type Out = <B::Size as Number>::Lt<A::Size>;
}

/// `C` with its arguments swapped.
#[derive(Debug)]
pub struct Reverse<C>(PhantomData<C>);

impl<C, A, B> Precedes<A, B> for Reverse<C>
where
    C: Precedes<B, A>,
{
    type Out = <C as Precedes<B, A>>::Out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Value;

    fn before<C: Precedes<A, B>, A, B>() -> bool {
        <C::Out as Value>::VALUE
    }

    #[test]
    fn test_by_size() {
        assert!(before::<BySize, u8, u32>());
        assert!(!before::<BySize, u32, u8>());
        assert!(!before::<BySize, i32, f32>());
        assert!(before::<BySize, [u8; 3], [u8; 4]>());
    }

    #[test]
    fn test_reversed() {
        assert!(before::<BySizeDesc, u64, u8>());
        assert!(before::<Reverse<BySize>, u64, u8>());
        assert!(!before::<Reverse<BySize>, u8, u64>());
    }
}
