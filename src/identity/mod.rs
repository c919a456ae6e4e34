//! # Layer 1: Identity
//!
//! What a type *is*, as far as the list engine can tell:
//! - `tree.rs`: identity trees (`Atom`, `App`) and their equality.
//! - `element.rs`: `Element`, `StorageSize`, `SameAs`, the `NoType` sentinel.
//! - `std_types.rs`: impls for core and alloc types.

pub mod tree;
pub mod element;
mod std_types;

pub use tree::{Atom, App, Identity, IdentityEq};
pub use element::{Element, StorageSize, SameAs, NoType};
