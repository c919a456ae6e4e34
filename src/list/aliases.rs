//! Type aliases for chaining list operations.
//!
//! Each alias is the `Out` of one combinator, so operations compose by
//! nesting: `Sorted<Unique<L>>`. Index arguments are plain `usize`
//! literals.
//!
//! ```
//! #![recursion_limit = "256"]
//! use tola_typelist::prelude::*;
//!
//! type L = typelist![f64, f32, i32, u8, i32, u8, f32, f64];
//! assert_type_eq!(Sorted<Unique<L>>, typelist![u8, f32, i32, f64]);
//! assert_type_eq!(Sliced<L, 0, 3>, typelist![f64, f32, i32]);
//! assert_type_eq!(At<L, 3>, u8);
//! ```

use crate::func::{BySize, IndexOf};
use crate::primitives::Idx;
use super::filter::{Distinct, Filter, Slice};
use super::node::TypeList;
use super::query::{FindIf, Get};
use super::sort::Sort;
use super::transform::TransformTypes;

/// Element at index `N`.
pub type At<L, const N: usize> = <L as Get<Idx<N>>>::Out;

/// `L` followed by the elements of `Us`.
pub type Appended<L, Us> = <L as TypeList>::Append<Us>;

/// `L` with `U` added at the end.
pub type Pushed<L, U> = <L as TypeList>::PushBack<U>;

/// Elements accepted by `P`.
pub type Filtered<L, P> = <L as Filter<P>>::Out;

/// First occurrences only.
pub type Unique<L> = <L as Distinct>::Out;

/// Elements with index in `[FROM, TO)`.
pub type Sliced<L, const FROM: usize, const TO: usize> = <L as Slice<Idx<FROM>, Idx<TO>>>::Out;

/// First element accepted by `P`, or `NoType`.
pub type Found<L, P> = <L as FindIf<P>>::Out;

/// `L` sorted by `C`.
pub type Sorted<L, C = BySize> = <L as Sort<C>>::Out;

/// Type-level map with the function `F`.
pub type Transformed<L, F> = <L as TransformTypes<F>>::Out;

/// `C::Apply<T>` for every element.
pub type Mapped<L, C> = <L as TypeList>::Map<C>;

/// Peano indices `D0..Dn-1` of the elements.
pub type Indices<L> = <L as TransformTypes<IndexOf>>::Out;
