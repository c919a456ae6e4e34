//! # Layer 2: Functions
//!
//! How callers hand computations to the list engine:
//! - `protocol.rs`: `Func`, shape tags, `Invoke`, `Call`, `Predicate`.
//! - `predicates.rs`: `Always`, `Never`, `IsType`, `InRange`, `Unseen`, combinators.
//! - `functions.rs`: value and type functions (`SizeOf`, `IndexOf`, `PointerTo`).
//! - `compare.rs`: sort comparators (`Precedes`, `BySize`).

pub mod protocol;
pub mod predicates;
pub mod functions;
pub mod compare;

pub use protocol::{
    ByContext, ByIndex, ByType, Call, Callable, ContextFn, Func, IndexFn, Invoke, Predicate, Test,
    TypeFn,
};
pub use predicates::{
    Always, Both, Either, InRange, IndexIs, IsFloat, IsIntegral, IsType, Negate, Never, Unseen,
};
pub use functions::{IndexOf, PointerTo, Size, SizeOf};
pub use compare::{BySize, BySizeDesc, Precedes, Reverse};
