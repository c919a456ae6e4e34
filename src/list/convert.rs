//! Moving between lists and other generic types.
//!
//! A *template* is a marker standing for a generic type with a parameter
//! pack. `Inject<L>` instantiates it with the elements of `L`,
//! `Extract<X>` reads the elements back out of an instantiation `X`.
//! For every template the two are inverse:
//! `Extracted<Injected<L, Tm>, Tm> == L`.
//!
//! Built-in templates: [`Tuple`] (arity 0 to 12), [`OneOf`] (the
//! [`Union`]/[`Void`] coproduct) and [`List`]. Adapt your own generic
//! types with [`template!`](crate::template).

use crate::identity::{App, Element};
use super::node::{Cons, Nil, TypeList};

/// Instantiate `Self` with the elements of `L`.
#[diagnostic::on_unimplemented(
    message = "template `{Self}` cannot be instantiated with `{L}`",
    label = "wrong number of elements for this template",
    note = "`Tuple` takes 0 to 12 elements; `template!` templates take exactly their declared arity"
)]
pub trait Inject<L> {
    type Out;
}

/// The elements `X` was instantiated with, as a list.
#[diagnostic::on_unimplemented(
    message = "`{X}` is not an instantiation of template `{Self}`",
    label = "cannot extract elements",
    note = "extract with the template that produced the type"
)]
pub trait Extract<X> {
    type Types: TypeList;
}

/// `Tm` instantiated with the elements of `L`.
pub type Injected<L, Tm> = <Tm as Inject<L>>::Out;

/// The elements of `X`, an instantiation of `Tm`.
pub type Extracted<X, Tm> = <Tm as Extract<X>>::Types;

// =============================================================================
// List
// =============================================================================

/// The list itself: `Injected<L, List>` is `L`.
#[derive(Debug, Clone, Copy, Default)]
pub struct List;

impl<L: TypeList> Inject<L> for List {
    type Out = L;
}

impl<L: TypeList> Extract<L> for List {
    type Types = L;
}

// =============================================================================
// Tuple
// =============================================================================

/// `(T1, ..., Tn)`, `n <= 12`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tuple;

macro_rules! tuple_template {
    ($($t:ident),*) => {
        impl<$($t),*> Inject<crate::typelist![$($t),*]> for Tuple {
            type Out = ($($t,)*);
        }

        impl<$($t),*> Extract<($($t,)*)> for Tuple {
            type Types = crate::typelist![$($t),*];
        }
    };
}

tuple_template!();
tuple_template!(A);
tuple_template!(A, B);
tuple_template!(A, B, C);
tuple_template!(A, B, C, D);
tuple_template!(A, B, C, D, E);
tuple_template!(A, B, C, D, E, F);
tuple_template!(A, B, C, D, E, F, G);
tuple_template!(A, B, C, D, E, F, G, H);
tuple_template!(A, B, C, D, E, F, G, H, I);
tuple_template!(A, B, C, D, E, F, G, H, I, J);
tuple_template!(A, B, C, D, E, F, G, H, I, J, K);
tuple_template!(A, B, C, D, E, F, G, H, I, J, K, L);

// =============================================================================
// OneOf
// =============================================================================

/// Tagged union of the list's elements: `Union<T1, Union<T2, ... Void>>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneOf;

/// Either the first alternative or one of the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Union<H, T> {
    Head(H),
    Tail(T),
}

/// No alternatives. Uninhabited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Void {}

impl<H, T> Union<H, T> {
    /// The first alternative, if that is what this holds.
    pub fn head(self) -> Option<H> {
        match self {
            Union::Head(h) => Some(h),
            Union::Tail(_) => None,
        }
    }

    /// The remaining alternatives, if the first is not what this holds.
    pub fn tail(self) -> Option<T> {
        match self {
            Union::Head(_) => None,
            Union::Tail(t) => Some(t),
        }
    }
}

impl Inject<Nil> for OneOf {
    type Out = Void;
}

impl<H, T> Inject<Cons<H, T>> for OneOf
where
    OneOf: Inject<T>,
{
    type Out = Union<H, <OneOf as Inject<T>>::Out>;
}

impl Extract<Void> for OneOf {
    type Types = Nil;
}

impl<H, T> Extract<Union<H, T>> for OneOf
where
    OneOf: Extract<T>,
{
    type Types = Cons<H, <OneOf as Extract<T>>::Types>;
}

impl Element for Void {
    type Id = crate::__atom!("tola_typelist::Void");
}

impl<H: Element, T: Element> Element for Union<H, T> {
    type Id = App<App<crate::__atom!("tola_typelist::Union"), H::Id>, T::Id>;
}

#[cfg(test)]
mod tests {
    use super::*;

    type L = crate::typelist![u8, i32, f64];

    #[test]
    fn test_tuple_round_trip() {
        crate::assert_type_eq!(Injected<L, Tuple>, (u8, i32, f64));
        crate::assert_type_eq!(Extracted<(u8, i32, f64), Tuple>, L);
        crate::assert_type_eq!(Injected<Nil, Tuple>, ());
        crate::assert_type_eq!(Extracted<(), Tuple>, Nil);
    }

    #[test]
    fn test_one_of_round_trip() {
        type U = Injected<L, OneOf>;
        crate::assert_type_eq!(U, Union<u8, Union<i32, Union<f64, Void>>>);
        crate::assert_type_eq!(Extracted<U, OneOf>, L);
        crate::assert_type_eq!(Extracted<Injected<Nil, OneOf>, OneOf>, Nil);
    }

    #[test]
    fn test_union_values() {
        type U = Injected<L, OneOf>;
        let v: U = Union::Tail(Union::Head(7));
        assert_eq!(v.head(), None);
        assert_eq!(v.tail().and_then(Union::head), Some(7i32));
    }
}
