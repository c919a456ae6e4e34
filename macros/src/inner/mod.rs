//! Table generators used inside the `tola-typelist` crate itself.
//!
//! Generated code refers to `crate::` paths, so these macros only expand
//! correctly from within the main crate.

pub mod array;
pub mod nibble;
pub mod peano;
