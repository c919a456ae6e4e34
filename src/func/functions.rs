//! Built-in value and type functions.

use core::marker::PhantomData;
use crate::primitives::{Peano, Value};
use super::protocol::{ByIndex, ByType, Func, IndexFn, TypeFn};

/// `size_of::<T>()` as a value.
///
/// Works for every sized type, no `StorageSize` needed: the size is only
/// read as a `const`, never lifted into a type.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeOf;

/// Value carrier returned by [`SizeOf`].
#[derive(Debug)]
pub struct Size<T>(PhantomData<T>);

impl<T> Value for Size<T> {
    type Type = usize;
    const VALUE: usize = core::mem::size_of::<T>();
}

impl Func for SizeOf {
    type Shape = ByType;
}

impl<T> TypeFn<T> for SizeOf {
    type Out = Size<T>;
}

/// The element's index. As a type function it yields the Peano index,
/// as a value function its `usize` value.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexOf;

impl Func for IndexOf {
    type Shape = ByIndex;
}

impl<T, I: Peano> IndexFn<T, I> for IndexOf {
    type Out = I;
}

/// `T` to `*const T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTo;

impl Func for PointerTo {
    type Shape = ByType;
}

impl<T> TypeFn<T> for PointerTo {
    type Out = *const T;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::Call;
    use crate::list::Nil;
    use crate::primitives::D3;

    #[test]
    fn test_size_of_values() {
        assert_eq!(<Call<SizeOf, u16, D3, Nil> as Value>::VALUE, 2);
        assert_eq!(<Call<SizeOf, [u8; 7], D3, Nil> as Value>::VALUE, 7);
        assert_eq!(<Call<IndexOf, u16, D3, Nil> as Value>::VALUE, 3);
    }

    #[test]
    fn test_pointer_to() {
        crate::assert_type_eq!(Call<PointerTo, u8, D3, Nil>, *const u8);
    }
}
