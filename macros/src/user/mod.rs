//! User-facing derive macros.

pub mod element;

pub use element::expand_derive_element;
