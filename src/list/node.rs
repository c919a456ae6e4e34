//! List nodes and the structural operations every list has.

use core::marker::PhantomData;
use crate::identity::{App, Element, StorageSize};
use crate::primitives::{Peano, S, U0, Z};
use super::ctor::TypeCtor;

/// The empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nil;

/// `H` followed by the list `T`.
///
/// Never constructed; lists live only in types. Build them with
/// [`typelist!`](crate::typelist).
#[derive(Debug)]
pub struct Cons<H, T>(PhantomData<(H, T)>);

/// An ordered, immutable sequence of types.
///
/// Structural operations are generic associated types, so they need no
/// bounds on the elements and chain freely:
///
/// ```
/// use tola_typelist::prelude::*;
///
/// type L = typelist![u8, i32];
/// type M = <<L as TypeList>::PushBack<f64> as TypeList>::PushFront<char>;
///
/// assert_type_eq!(M, typelist![char, u8, i32, f64]);
/// assert_eq!(<M as TypeList>::LEN, 4);
/// ```
pub trait TypeList {
    /// Number of elements, duplicates included.
    const LEN: usize;
    /// `LEN == 0`
    const IS_EMPTY: bool = Self::LEN == 0;

    /// `LEN` as a Peano number.
    type Len: Peano;

    /// `Self` with `U` at the end.
    type PushBack<U>: TypeList;
    /// `Self` with `U` at the front.
    type PushFront<U>: TypeList;
    /// `Self` followed by every element of `Us`.
    type Append<Us: TypeList>: TypeList;
    /// Every element of `Us` followed by `Self`.
    type Prepend<Us: TypeList>: TypeList;
    /// `C::Apply<T>` for every element `T`.
    type Map<C: TypeCtor>: TypeList;
}

impl TypeList for Nil {
    const LEN: usize = 0;
    type Len = Z;

    type PushBack<U> = Cons<U, Nil>;
    type PushFront<U> = Cons<U, Nil>;
    type Append<Us: TypeList> = Us;
    type Prepend<Us: TypeList> = Us;
    type Map<C: TypeCtor> = Nil;
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
    type Len = S<T::Len>;

    type PushBack<U> = Cons<H, T::PushBack<U>>;
    type PushFront<U> = Cons<U, Self>;
    type Append<Us: TypeList> = Cons<H, T::Append<Us>>;
    type Prepend<Us: TypeList> = <Us as TypeList>::Append<Self>;
    type Map<C: TypeCtor> = Cons<C::Apply<H>, T::Map<C>>;
}

// Lists are elements themselves, so lists of lists can be searched.

impl Element for Nil {
    type Id = crate::__atom!("tola_typelist::Nil");
}

impl<H: Element, T: Element> Element for Cons<H, T> {
    type Id = App<App<crate::__atom!("tola_typelist::Cons"), H::Id>, T::Id>;
}

impl StorageSize for Nil {
    type Size = U0;
}

impl<H, T> StorageSize for Cons<H, T> {
    type Size = U0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{D0, D3, Value};

    type Three = Cons<u8, Cons<u16, Cons<u32, Nil>>>;

    #[test]
    fn test_len() {
        assert_eq!(<Nil as TypeList>::LEN, 0);
        assert!(<Nil as TypeList>::IS_EMPTY);
        assert_eq!(<Three as TypeList>::LEN, 3);
        assert!(!<Three as TypeList>::IS_EMPTY);
        assert_eq!(<<Three as TypeList>::Len as Value>::VALUE, 3);
        crate::assert_type_eq!(<Three as TypeList>::Len, D3);
        crate::assert_type_eq!(<Nil as TypeList>::Len, D0);
    }

    #[test]
    fn test_push_and_append() {
        crate::assert_type_eq!(<Nil as TypeList>::PushBack<u8>, Cons<u8, Nil>);
        crate::assert_type_eq!(
            <Three as TypeList>::PushBack<u64>,
            Cons<u8, Cons<u16, Cons<u32, Cons<u64, Nil>>>>
        );
        crate::assert_type_eq!(
            <Three as TypeList>::PushFront<u64>,
            Cons<u64, Three>
        );
        crate::assert_type_eq!(
            <Cons<i8, Nil> as TypeList>::Append<Three>,
            Cons<i8, Three>
        );
        crate::assert_type_eq!(
            <Cons<i8, Nil> as TypeList>::Prepend<Three>,
            Cons<u8, Cons<u16, Cons<u32, Cons<i8, Nil>>>>
        );
    }
}
