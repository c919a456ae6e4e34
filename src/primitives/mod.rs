//! # Layer 0: Primitives
//!
//! Basic building blocks for the list engine:
//! - `bool.rs`: Type-level boolean logic (True/False).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF) with GAT arithmetic.
//! - `ordering.rs`: Type-level Less/Equal/Greater.
//! - `peano.rs`: Peano numbers for indices and lengths.
//! - `number.rs`: 24-bit numbers for storage sizes.
//! - `bridge.rs`: const values to types.

pub mod bool;
pub mod nibble;
pub mod ordering;
pub mod peano;
pub mod number;
pub mod value;
pub mod bridge;
pub mod const_utils;

// Re-export key types at this level
pub use bool::{Bool, True, False};
pub use nibble::{Nibble, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};
pub use ordering::{Ordering, Less, Equal, Greater};
pub use peano::{Peano, Z, S, NotAfter};
pub use peano::{D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13, D14, D15, D16};
pub use number::{Num, Number, U0};
pub use value::Value;
pub use bridge::{ToNibble, Const, ToPeano, Idx};
