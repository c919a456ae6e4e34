//! `Element` and `StorageSize` for core and alloc types.
//!
//! Concrete types get an atom named after their path and a size lifted
//! from `size_of`. Generic types are applications of their constructor's
//! atom to each parameter. Sizes of generic types are only given where
//! they do not depend on the parameter (pointers, `Vec`, `PhantomData`).

use core::marker::PhantomData;
use crate::primitives::{False, True, S, U0, Z};
use super::element::{Element, StorageSize};
use super::tree::App;

macro_rules! impl_concrete {
    ($($t:ty => $name:literal),* $(,)?) => {
        $(
            impl Element for $t {
                type Id = crate::__atom!($name);
            }

            impl StorageSize for $t {
                type Size = crate::__num!(core::mem::size_of::<$t>());
            }
        )*
    };
}

impl_concrete! {
    () => "()",
    bool => "bool",
    char => "char",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    f32 => "f32",
    f64 => "f64",
    core::cmp::Ordering => "core::cmp::Ordering",
    core::time::Duration => "core::time::Duration",
    core::convert::Infallible => "core::convert::Infallible",
}

impl Element for str {
    type Id = crate::__atom!("str");
}

type PointerSize = crate::__num!(core::mem::size_of::<&u8>());

// =============================================================================
// Generic constructors
// =============================================================================

impl<T: Element> Element for Option<T> {
    type Id = App<crate::__atom!("core::option::Option"), T::Id>;
}

impl<T: Element, E: Element> Element for Result<T, E> {
    type Id = App<App<crate::__atom!("core::result::Result"), T::Id>, E::Id>;
}

impl<T: Element + ?Sized> Element for PhantomData<T> {
    type Id = App<crate::__atom!("core::marker::PhantomData"), T::Id>;
}

impl<T: ?Sized> StorageSize for PhantomData<T> {
    type Size = U0;
}

impl<T: Element> Element for [T] {
    type Id = App<crate::__atom!("[_]"), T::Id>;
}

impl<T: Element + ?Sized> Element for &T {
    type Id = App<crate::__atom!("&_"), T::Id>;
}

impl<T: Element + ?Sized> Element for &mut T {
    type Id = App<crate::__atom!("&mut _"), T::Id>;
}

impl<T: Element + ?Sized> Element for *const T {
    type Id = App<crate::__atom!("*const _"), T::Id>;
}

impl<T: Element + ?Sized> Element for *mut T {
    type Id = App<crate::__atom!("*mut _"), T::Id>;
}

impl<T> StorageSize for &T {
    type Size = PointerSize;
}

impl<T> StorageSize for &mut T {
    type Size = PointerSize;
}

impl<T> StorageSize for *const T {
    type Size = PointerSize;
}

impl<T> StorageSize for *mut T {
    type Size = PointerSize;
}

// impl Element / StorageSize for [T; 0..=32]
macros::array_impls!(32);

// =============================================================================
// Tuples
// =============================================================================

macro_rules! impl_tuple {
    (@app $acc:ty;) => { $acc };
    (@app $acc:ty; $head:ident $(, $rest:ident)*) => {
        impl_tuple!(@app App<$acc, <$head as Element>::Id>; $($rest),*)
    };
    ($name:literal; $($t:ident),+) => {
        impl<$($t: Element),+> Element for ($($t,)+) {
            type Id = impl_tuple!(@app crate::__atom!($name); $($t),+);
        }
    };
}

impl_tuple!("(_,)"; A);
impl_tuple!("(_, _)"; A, B);
impl_tuple!("(_, _, _)"; A, B, C);
impl_tuple!("(_, _, _, _)"; A, B, C, D);
impl_tuple!("(_, _, _, _, _)"; A, B, C, D, E);
impl_tuple!("(_, _, _, _, _, _)"; A, B, C, D, E, F);
impl_tuple!("(_, _, _, _, _, _, _)"; A, B, C, D, E, F, G);
impl_tuple!("(_, _, _, _, _, _, _, _)"; A, B, C, D, E, F, G, H);
impl_tuple!("(_, _, _, _, _, _, _, _, _)"; A, B, C, D, E, F, G, H, I);
impl_tuple!("(_, _, _, _, _, _, _, _, _, _)"; A, B, C, D, E, F, G, H, I, J);
impl_tuple!("(_, _, _, _, _, _, _, _, _, _, _)"; A, B, C, D, E, F, G, H, I, J, K);
impl_tuple!("(_, _, _, _, _, _, _, _, _, _, _, _)"; A, B, C, D, E, F, G, H, I, J, K, L);

// =============================================================================
// Alloc
// =============================================================================

#[cfg(feature = "alloc")]
mod alloc_types {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;
    use super::*;

    impl_concrete! {
        String => "alloc::string::String",
    }

    impl<T: Element + ?Sized> Element for Box<T> {
        type Id = App<crate::__atom!("alloc::boxed::Box"), T::Id>;
    }

    impl<T> StorageSize for Box<T> {
        type Size = PointerSize;
    }

    impl<T: Element> Element for Vec<T> {
        type Id = App<crate::__atom!("alloc::vec::Vec"), T::Id>;
    }

    impl<T> StorageSize for Vec<T> {
        type Size = crate::__num!(core::mem::size_of::<Vec<u8>>());
    }
}

// =============================================================================
// Crate types
// =============================================================================

impl Element for True {
    type Id = crate::__atom!("tola_typelist::True");
}

impl Element for False {
    type Id = crate::__atom!("tola_typelist::False");
}

impl Element for Z {
    type Id = crate::__atom!("tola_typelist::Z");
}

impl<N: Element> Element for S<N> {
    type Id = App<crate::__atom!("tola_typelist::S"), N::Id>;
}

impl StorageSize for Z {
    type Size = U0;
}

impl<N> StorageSize for S<N> {
    type Size = U0;
}
