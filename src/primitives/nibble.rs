//! Type-level nibble system (4-bit values X0-XF).
//!
//! Nibbles are the digits of type-level hashes (`Atom`) and sizes (`Num`).
//! All arithmetic is expressed through generic associated types, so no
//! `where` clauses are needed to add or compare two abstract nibbles.

use super::bool::Bool;
use super::ordering::Ordering;
use super::value::Value;

// =============================================================================
// Nibble iteration macros
// =============================================================================

/// Iterate over all 16 nibbles (X0..XF).
#[macro_export]
macro_rules! for_each_nibble {
    ($mac:ident) => {
        $mac!(X0); $mac!(X1); $mac!(X2); $mac!(X3);
        $mac!(X4); $mac!(X5); $mac!(X6); $mac!(X7);
        $mac!(X8); $mac!(X9); $mac!(XA); $mac!(XB);
        $mac!(XC); $mac!(XD); $mac!(XE); $mac!(XF);
    };
}

// =============================================================================
// Nibble trait and types
// =============================================================================

/// Type-level nibble (4-bit value, 0..15)
///
/// Binary operations use double dispatch: `Xa::Plus<O>` forwards to the
/// hidden slot `O::__SumA`, which every nibble fills in with `A + O`.
pub trait Nibble: Value<Type = u8> + 'static {
    /// `Self + 1`, wrapping.
    type Succ: Nibble;
    /// `Self == XF`.
    type IsMax: Bool;
    /// `(Self + O) mod 16`.
    type Plus<O: Nibble>: Nibble;
    /// `Self + O >= 16`.
    type Overflows<O: Nibble>: Bool;
    /// `Self` compared with `O`.
    type Cmp<O: Nibble>: Ordering;
    /// `Self == O`.
    type Eq<O: Nibble>: Bool;

    // Dispatch slots, `K` is the hex digit in the name:
    // `__SumK = (K + Self) mod 16`, `__OvfK = K + Self >= 16`, `__CmpK = cmp(K, Self)`.
    #[doc(hidden)] type __Sum0: Nibble;
    #[doc(hidden)] type __Sum1: Nibble;
    #[doc(hidden)] type __Sum2: Nibble;
    #[doc(hidden)] type __Sum3: Nibble;
    #[doc(hidden)] type __Sum4: Nibble;
    #[doc(hidden)] type __Sum5: Nibble;
    #[doc(hidden)] type __Sum6: Nibble;
    #[doc(hidden)] type __Sum7: Nibble;
    #[doc(hidden)] type __Sum8: Nibble;
    #[doc(hidden)] type __Sum9: Nibble;
    #[doc(hidden)] type __SumA: Nibble;
    #[doc(hidden)] type __SumB: Nibble;
    #[doc(hidden)] type __SumC: Nibble;
    #[doc(hidden)] type __SumD: Nibble;
    #[doc(hidden)] type __SumE: Nibble;
    #[doc(hidden)] type __SumF: Nibble;
    #[doc(hidden)] type __Ovf0: Bool;
    #[doc(hidden)] type __Ovf1: Bool;
    #[doc(hidden)] type __Ovf2: Bool;
    #[doc(hidden)] type __Ovf3: Bool;
    #[doc(hidden)] type __Ovf4: Bool;
    #[doc(hidden)] type __Ovf5: Bool;
    #[doc(hidden)] type __Ovf6: Bool;
    #[doc(hidden)] type __Ovf7: Bool;
    #[doc(hidden)] type __Ovf8: Bool;
    #[doc(hidden)] type __Ovf9: Bool;
    #[doc(hidden)] type __OvfA: Bool;
    #[doc(hidden)] type __OvfB: Bool;
    #[doc(hidden)] type __OvfC: Bool;
    #[doc(hidden)] type __OvfD: Bool;
    #[doc(hidden)] type __OvfE: Bool;
    #[doc(hidden)] type __OvfF: Bool;
    #[doc(hidden)] type __Cmp0: Ordering;
    #[doc(hidden)] type __Cmp1: Ordering;
    #[doc(hidden)] type __Cmp2: Ordering;
    #[doc(hidden)] type __Cmp3: Ordering;
    #[doc(hidden)] type __Cmp4: Ordering;
    #[doc(hidden)] type __Cmp5: Ordering;
    #[doc(hidden)] type __Cmp6: Ordering;
    #[doc(hidden)] type __Cmp7: Ordering;
    #[doc(hidden)] type __Cmp8: Ordering;
    #[doc(hidden)] type __Cmp9: Ordering;
    #[doc(hidden)] type __CmpA: Ordering;
    #[doc(hidden)] type __CmpB: Ordering;
    #[doc(hidden)] type __CmpC: Ordering;
    #[doc(hidden)] type __CmpD: Ordering;
    #[doc(hidden)] type __CmpE: Ordering;
    #[doc(hidden)] type __CmpF: Ordering;
}

// Define structs X0..XF
macro_rules! define_nibble {
    ($n:ident) => {
        #[derive(Debug)]
        pub struct $n;
    };
}
for_each_nibble!(define_nibble);

// Value, Nibble and every dispatch slot for X0..XF.
macros::nibble_impls!();
