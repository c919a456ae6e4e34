//! # Layer 3: Lists
//!
//! The list engine:
//! - `node.rs`: `Nil`, `Cons`, `TypeList` (length, push, append, map).
//! - `ctor.rs`: type constructors for `TypeList::Map`.
//! - `query.rs`: `Has`, `Contains`, `Get`, `FindIf`, `AnyOf`/`AllOf`/`NoneOf`.
//! - `filter.rs`: `Filter`, `Distinct`, `Slice`.
//! - `transform.rs`: `TransformTypes`, `TransformValues`.
//! - `sort.rs`: `Sort`.
//! - `convert.rs`: `Inject`/`Extract` and the built-in templates.
//! - `aliases.rs`: aliases for chaining.

pub mod node;
pub mod ctor;
pub mod query;
pub mod filter;
pub mod transform;
pub mod sort;
pub mod convert;
pub mod aliases;

pub use node::{Cons, Nil, TypeList};
#[cfg(feature = "alloc")]
pub use ctor::{Boxed, Listed};
pub use ctor::{Optional, Phantom, TypeCtor};
pub use query::{AllOf, AnyOf, Contains, FindIf, Get, Has, NoneOf};
pub use filter::{Distinct, Filter, Slice};
pub use transform::{TransformTypes, TransformValues};
pub use sort::{BubblePass, Sort};
pub use convert::{Extract, Extracted, Inject, Injected, List, OneOf, Tuple, Union, Void};
pub use aliases::*;
