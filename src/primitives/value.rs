//! Types that carry a compile-time constant.

/// A type standing for a single constant.
///
/// `Bool`, `Peano`, `Nibble` and `Number` are all `Value`s, and value-level
/// functions (see [`TransformValues`](crate::list::TransformValues)) return
/// a `Value` type per element.
pub trait Value {
    type Type: Copy;
    const VALUE: Self::Type;
}
