//! Identity trees and their equality.
//!
//! An identity is either an `Atom` (a 64-bit FNV-1a hash of a path string,
//! stored as 16 nibbles, least significant first) or an application
//! `App<F, A>` of one identity to another. Generic types become chains of
//! `App`: `Option<u8>` is `App<Atom("core::option::Option"), Atom("u8")>`.
//!
//! Equality compares the trees structurally. Only atoms are compared by
//! hash, so a collision needs two distinct leaf paths with the same 64-bit
//! hash.

use core::marker::PhantomData;
use crate::primitives::{Bool, False, Nibble};

/// Leaf identity: 16 hash nibbles.
#[derive(Debug)]
pub struct Atom<N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, NA, NB, NC, ND, NE, NF>(
    PhantomData<(N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, NA, NB, NC, ND, NE, NF)>,
);

/// `F` applied to `A`.
#[derive(Debug)]
pub struct App<F, A>(PhantomData<(F, A)>);

/// Marker for well-formed identity trees.
pub trait Identity: 'static {}

impl<N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, NA, NB, NC, ND, NE, NF> Identity
    for Atom<N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, NA, NB, NC, ND, NE, NF>
where
    N0: Nibble, N1: Nibble, N2: Nibble, N3: Nibble,
    N4: Nibble, N5: Nibble, N6: Nibble, N7: Nibble,
    N8: Nibble, N9: Nibble, NA: Nibble, NB: Nibble,
    NC: Nibble, ND: Nibble, NE: Nibble, NF: Nibble,
{
}

impl<F: Identity, A: Identity> Identity for App<F, A> {}

/// Structural equality of two identity trees.
pub trait IdentityEq<Other> {
    type Out: Bool;
}

// Pairwise equality of four digits, combined as a balanced tree so no
// projection nests deeper than a handful of levels.
type Eq4<A0, B0, A1, B1, A2, B2, A3, B3> = <<<A0 as Nibble>::Eq<B0> as Bool>::And<
    <A1 as Nibble>::Eq<B1>,
> as Bool>::And<<<A2 as Nibble>::Eq<B2> as Bool>::And<<A3 as Nibble>::Eq<B3>>>;

impl<
    A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, AA, AB, AC, AD, AE, AF,
    B0, B1, B2, B3, B4, B5, B6, B7, B8, B9, BA, BB, BC, BD, BE, BF,
> IdentityEq<Atom<B0, B1, B2, B3, B4, B5, B6, B7, B8, B9, BA, BB, BC, BD, BE, BF>>
    for Atom<A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, AA, AB, AC, AD, AE, AF>
where
    A0: Nibble, A1: Nibble, A2: Nibble, A3: Nibble,
    A4: Nibble, A5: Nibble, A6: Nibble, A7: Nibble,
    A8: Nibble, A9: Nibble, AA: Nibble, AB: Nibble,
    AC: Nibble, AD: Nibble, AE: Nibble, AF: Nibble,
    B0: Nibble, B1: Nibble, B2: Nibble, B3: Nibble,
    B4: Nibble, B5: Nibble, B6: Nibble, B7: Nibble,
    B8: Nibble, B9: Nibble, BA: Nibble, BB: Nibble,
    BC: Nibble, BD: Nibble, BE: Nibble, BF: Nibble,
{
    type Out = <<Eq4<A0, B0, A1, B1, A2, B2, A3, B3> as Bool>::And<
        Eq4<A4, B4, A5, B5, A6, B6, A7, B7>,
    > as Bool>::And<
        <Eq4<A8, B8, A9, B9, AA, BA, AB, BB> as Bool>::And<Eq4<AC, BC, AD, BD, AE, BE, AF, BF>>,
    >;
}

impl<F, A, G, B> IdentityEq<App<G, B>> for App<F, A>
where
    F: IdentityEq<G>,
    A: IdentityEq<B>,
{
    type Out = <<F as IdentityEq<G>>::Out as Bool>::And<<A as IdentityEq<B>>::Out>;
}

impl<F, A, N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, NA, NB, NC, ND, NE, NF>
    IdentityEq<Atom<N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, NA, NB, NC, ND, NE, NF>> for App<F, A>
{
    type Out = False;
}

impl<F, A, N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, NA, NB, NC, ND, NE, NF> IdentityEq<App<F, A>>
    for Atom<N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, NA, NB, NC, ND, NE, NF>
{
    type Out = False;
}

/// Build the `Atom` for a `&'static str` const expression.
///
/// ```ignore
/// type Id = __atom!("core::option::Option");
/// type Id = __atom!(concat!(module_path!(), "::", "Meters"));
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! __atom {
    ($s:expr) => {
        $crate::identity::Atom<
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 0) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 1) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 2) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 3) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 4) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 5) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 6) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 7) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 8) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 9) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 10) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 11) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 12) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 13) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 14) }>>::Out,
            <() as $crate::primitives::ToNibble<{ $crate::primitives::const_utils::hash_nibble($s, 15) }>>::Out,
        >
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Value;

    type Foo = crate::__atom!("tests::Foo");
    type Bar = crate::__atom!("tests::Bar");

    fn eq<A: IdentityEq<B>, B>() -> bool {
        <A::Out as Value>::VALUE
    }

    #[test]
    fn test_atom_equality() {
        assert!(eq::<Foo, Foo>());
        assert!(!eq::<Foo, Bar>());
    }

    #[test]
    fn test_application_equality() {
        assert!(eq::<App<Foo, Bar>, App<Foo, Bar>>());
        assert!(!eq::<App<Foo, Bar>, App<Bar, Foo>>());
        assert!(!eq::<App<Foo, Bar>, Foo>());
        assert!(!eq::<Bar, App<Foo, Bar>>());
        assert!(eq::<App<App<Foo, Bar>, Bar>, App<App<Foo, Bar>, Bar>>());
    }
}
