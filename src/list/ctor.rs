//! Single-parameter type constructors for `TypeList::Map`.
//!
//! A constructor is a marker with a generic associated type. Any generic
//! type of one parameter can be adapted:
//!
//! ```
//! use tola_typelist::prelude::*;
//!
//! struct Celled;
//! impl TypeCtor for Celled {
//!     type Apply<T> = core::cell::Cell<T>;
//! }
//!
//! type L = <typelist![u8, i32] as TypeList>::Map<Celled>;
//! assert_type_eq!(L, typelist![core::cell::Cell<u8>, core::cell::Cell<i32>]);
//! ```

use core::marker::PhantomData;

/// `T` to `Self::Apply<T>`.
pub trait TypeCtor {
    type Apply<T>;
}

/// `T` to `Option<T>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optional;

impl TypeCtor for Optional {
    type Apply<T> = Option<T>;
}

/// `T` to `PhantomData<T>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Phantom;

impl TypeCtor for Phantom {
    type Apply<T> = PhantomData<T>;
}

/// `T` to `Box<T>`.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Boxed;

#[cfg(feature = "alloc")]
impl TypeCtor for Boxed {
    type Apply<T> = alloc::boxed::Box<T>;
}

/// `T` to `Vec<T>`.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Listed;

#[cfg(feature = "alloc")]
impl TypeCtor for Listed {
    type Apply<T> = alloc::vec::Vec<T>;
}
