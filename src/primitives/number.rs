//! 24-bit type-level unsigned numbers.
//!
//! `Num<D5, D4, D3, D2, D1, D0>` stores six nibbles, most significant
//! first. It is how storage sizes reach the type level: concrete types are
//! lifted from `size_of` through [`__num!`](crate::__num), arrays add up
//! their element size with `Plus`.

use core::marker::PhantomData;
use super::bool::{Bool, False};
use super::nibble::{Nibble, X0};
use super::ordering::Ordering;
use super::value::Value;

/// Six-nibble number, most significant digit first.
#[derive(Debug)]
pub struct Num<D5, D4, D3, D2, D1, D0>(PhantomData<(D5, D4, D3, D2, D1, D0)>);

/// Zero.
pub type U0 = Num<X0, X0, X0, X0, X0, X0>;

/// Type-level unsigned number.
pub trait Number: Value<Type = usize> + 'static {
    type D5: Nibble;
    type D4: Nibble;
    type D3: Nibble;
    type D2: Nibble;
    type D1: Nibble;
    type D0: Nibble;

    /// `Self + O`, wrapping at 2^24.
    type Plus<O: Number>: Number;
    /// `Self + Self`
    type Double: Number;
    /// `Self` compared with `O`.
    type Cmp<O: Number>: Ordering;
    /// `Self < O`
    type Lt<O: Number>: Bool;
}

// Ripple-carry addition, one digit at a time.
type DigitSum<A, B, C> =
    <C as Bool>::IfNibble<<<A as Nibble>::Plus<B> as Nibble>::Succ, <A as Nibble>::Plus<B>>;
type DigitCarry<A, B, C> =
    <<A as Nibble>::Overflows<B> as Bool>::Or<<C as Bool>::And<<<A as Nibble>::Plus<B> as Nibble>::IsMax>>;

type Carry1<A, B> = DigitCarry<<A as Number>::D0, <B as Number>::D0, False>;
type Carry2<A, B> = DigitCarry<<A as Number>::D1, <B as Number>::D1, Carry1<A, B>>;
type Carry3<A, B> = DigitCarry<<A as Number>::D2, <B as Number>::D2, Carry2<A, B>>;
type Carry4<A, B> = DigitCarry<<A as Number>::D3, <B as Number>::D3, Carry3<A, B>>;
type Carry5<A, B> = DigitCarry<<A as Number>::D4, <B as Number>::D4, Carry4<A, B>>;

impl<A5, A4, A3, A2, A1, A0> Value for Num<A5, A4, A3, A2, A1, A0>
where
    A5: Nibble, A4: Nibble, A3: Nibble, A2: Nibble, A1: Nibble, A0: Nibble,
{
    type Type = usize;
    const VALUE: usize = ((A5::VALUE as usize) << 20)
        | ((A4::VALUE as usize) << 16)
        | ((A3::VALUE as usize) << 12)
        | ((A2::VALUE as usize) << 8)
        | ((A1::VALUE as usize) << 4)
        | (A0::VALUE as usize);
}

impl<A5, A4, A3, A2, A1, A0> Number for Num<A5, A4, A3, A2, A1, A0>
where
    A5: Nibble, A4: Nibble, A3: Nibble, A2: Nibble, A1: Nibble, A0: Nibble,
{
    type D5 = A5;
    type D4 = A4;
    type D3 = A3;
    type D2 = A2;
    type D1 = A1;
    type D0 = A0;

    type Plus<O: Number> = Num<
        DigitSum<A5, O::D5, Carry5<Self, O>>,
        DigitSum<A4, O::D4, Carry4<Self, O>>,
        DigitSum<A3, O::D3, Carry3<Self, O>>,
        DigitSum<A2, O::D2, Carry2<Self, O>>,
        DigitSum<A1, O::D1, Carry1<Self, O>>,
        DigitSum<A0, O::D0, False>,
    >;

    type Double = <Self as Number>::Plus<Self>;

    type Cmp<O: Number> = <<A5 as Nibble>::Cmp<O::D5> as Ordering>::Then<
        <<A4 as Nibble>::Cmp<O::D4> as Ordering>::Then<
            <<A3 as Nibble>::Cmp<O::D3> as Ordering>::Then<
                <<A2 as Nibble>::Cmp<O::D2> as Ordering>::Then<
                    <<A1 as Nibble>::Cmp<O::D1> as Ordering>::Then<<A0 as Nibble>::Cmp<O::D0>>,
                >,
            >,
        >,
    >;

    type Lt<O: Number> = <<Self as Number>::Cmp<O> as Ordering>::IsLess;
}

/// Lift a `usize` const expression into a `Num`.
///
/// The expression must not mention generic parameters (stable Rust cannot
/// evaluate those in type position); `size_of::<ConcreteType>()` is the
/// typical input.
#[macro_export]
#[doc(hidden)]
macro_rules! __num {
    ($n:expr) => {
        $crate::primitives::number::Num<
            <() as $crate::primitives::bridge::ToNibble<{ $crate::primitives::const_utils::size_nibble($n, 5) }>>::Out,
            <() as $crate::primitives::bridge::ToNibble<{ $crate::primitives::const_utils::size_nibble($n, 4) }>>::Out,
            <() as $crate::primitives::bridge::ToNibble<{ $crate::primitives::const_utils::size_nibble($n, 3) }>>::Out,
            <() as $crate::primitives::bridge::ToNibble<{ $crate::primitives::const_utils::size_nibble($n, 2) }>>::Out,
            <() as $crate::primitives::bridge::ToNibble<{ $crate::primitives::const_utils::size_nibble($n, 1) }>>::Out,
            <() as $crate::primitives::bridge::ToNibble<{ $crate::primitives::const_utils::size_nibble($n, 0) }>>::Out,
        >
    };
}
