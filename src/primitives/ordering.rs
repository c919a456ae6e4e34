//! Type-level three-way comparison result.

use super::bool::{Bool, False, True};

/// Type-level `core::cmp::Ordering`.
pub trait Ordering: 'static {
    /// Lexicographic chaining: `Self` unless `Self` is `Equal`.
    type Then<Next: Ordering>: Ordering;
    type IsLess: Bool;
    type IsEqual: Bool;
    type IsGreater: Bool;
    /// The runtime mirror.
    const ORDERING: core::cmp::Ordering;
}

#[derive(Debug)]
pub struct Less;

#[derive(Debug)]
pub struct Equal;

#[derive(Debug)]
pub struct Greater;

impl Ordering for Less {
    type Then<Next: Ordering> = Less;
    type IsLess = True;
    type IsEqual = False;
    type IsGreater = False;
    const ORDERING: core::cmp::Ordering = core::cmp::Ordering::Less;
}

impl Ordering for Equal {
    type Then<Next: Ordering> = Next;
    type IsLess = False;
    type IsEqual = True;
    type IsGreater = False;
    const ORDERING: core::cmp::Ordering = core::cmp::Ordering::Equal;
}

impl Ordering for Greater {
    type Then<Next: Ordering> = Greater;
    type IsLess = False;
    type IsEqual = False;
    type IsGreater = True;
    const ORDERING: core::cmp::Ordering = core::cmp::Ordering::Greater;
}
