#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]
#![recursion_limit = "256"]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types (Box, Vec, String) in no_std

//! # tola-typelist
//!
//! **Compile-time type lists for Rust.**
//!
//! A type list is an ordered, immutable sequence of types that exists only
//! in the type system. Every operation is a trait projection resolved by
//! the compiler: filtering, searching, slicing, sorting, deduplicating,
//! mapping, folding to booleans and to `const` arrays, and converting to
//! and from tuples, tagged unions or any other generic type.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool, Nibble (X0-XF), Ordering, Peano (Z/S), Number (24-bit)   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Identity                                                |
//! |  - Element (Atom/App identity trees), StorageSize, NoType         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Functions                                               |
//! |  - Func + shape tags (ByType/ByIndex/ByContext), Precedes         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Lists                                                   |
//! |  - Nil/Cons, Filter, FindIf, Slice, Sort, Transform, Inject/Extract |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ### Type equality
//! Stable Rust cannot ask "is `A` the same type as `B`" in a where clause
//! and get `False` back. Elements therefore carry an identity: a tree of
//! `Atom`s (64-bit FNV-1a hashes of type paths, as 16 nibbles) joined by
//! `App` for generic parameters. `SameAs` compares the trees nibble by
//! nibble. Core and alloc types are covered; derive `Element` for your
//! own.
//!
//! ### Functions
//! Predicates and type functions are zero-sized markers that declare
//! their call shape. The engine always supplies `(element, index,
//! context)`; the shape decides which of those the function sees.
//!
//! ## Quick Start
//!
//! ```
//! #![recursion_limit = "256"]
//! use tola_typelist::prelude::*;
//!
//! type L = typelist![f64, f32, i32, u8, i32, u8, f32, f64];
//!
//! assert_eq!(<L as TypeList>::LEN, 8);
//! assert!(<L as Has<i32>>::VALUE);
//! assert_type_eq!(Unique<L>, typelist![f64, f32, i32, u8]);
//! assert_type_eq!(Sliced<L, 0, 3>, typelist![f64, f32, i32]);
//! assert_type_eq!(Sorted<L>, typelist![u8, u8, f32, i32, i32, f32, f64, f64]);
//! assert_type_eq!(Found<L, IsType<char>>, NoType);
//! assert_eq!(values!(Unique<L>, SizeOf), [8, 4, 4, 1]);
//! ```

// Allow `::tola_typelist` to work inside the crate itself
extern crate self as tola_typelist;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for template! macro
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Identity
// =============================================================================
pub mod identity;

// =============================================================================
// Layer 2: Functions
// =============================================================================
pub mod func;

// =============================================================================
// Layer 3: Lists
// =============================================================================
pub mod list;

// Syntax macros (typelist!, assert_type_eq!, values!, template!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{Bool, True, False, Peano, Value, Z, S, Idx};
pub use identity::{Element, StorageSize, SameAs, NoType};
pub use func::{Func, ByType, ByIndex, ByContext, TypeFn, IndexFn, ContextFn, Call, Precedes};
pub use list::{Cons, Nil, TypeList};

// Re-export proc-macros
pub use macros::Element;

/// Common items for working with type lists.
pub mod prelude {
    pub use crate::primitives::{Bool, True, False, Number, Peano, Value, Idx, Z, S};
    pub use crate::primitives::{D0, D1, D2, D3, D4, D5, D6, D7, D8};
    pub use crate::identity::{Element, StorageSize, SameAs, NoType};
    pub use crate::func::{
        // Protocol
        Func, ByType, ByIndex, ByContext, TypeFn, IndexFn, ContextFn, Call, Predicate, Test,
        // Built-ins
        Always, Never, Negate, Both, Either, IsType, IsIntegral, IsFloat, IndexIs, InRange,
        Unseen, SizeOf, IndexOf, PointerTo,
        // Comparators
        Precedes, BySize, BySizeDesc, Reverse,
    };
    pub use crate::list::{
        // Core
        Cons, Nil, TypeList, TypeCtor, Optional, Phantom,
        // Operations
        Has, Contains, Get, FindIf, AnyOf, AllOf, NoneOf, Filter, Distinct, Slice,
        TransformTypes, TransformValues, Sort,
        // Conversion
        Inject, Extract, Injected, Extracted, List, Tuple, OneOf, Union, Void,
        // Aliases
        At, Appended, Pushed, Filtered, Unique, Sliced, Found, Sorted, Transformed, Mapped,
        Indices,
    };
    #[cfg(feature = "alloc")]
    pub use crate::list::{Boxed, Listed};
    pub use crate::{assert_type_eq, template, typelist, values};
    pub use macros::Element;
}
