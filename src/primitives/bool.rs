//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, `Bool` trait.

use super::nibble::Nibble;
use super::value::Value;

/// Type-level boolean.
pub trait Bool: Value<Type = bool> + 'static {
    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Type-level boolean conditional: Then<T, E> where T, E are Bool.
    /// Returns a type guaranteed to implement Bool.
    type Elif<Then: Bool, Else: Bool>: Bool;

    /// Nibble selector, used by carry propagation in `Number`.
    type IfNibble<Then: Nibble, Else: Nibble>: Nibble;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct True;

/// Type-level False.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct False;

impl Value for True {
    type Type = bool;
    const VALUE: bool = true;
}

impl Value for False {
    type Type = bool;
    const VALUE: bool = false;
}

impl Bool for True {
    type If<Then, Else> = Then;
    type Elif<Then: Bool, Else: Bool> = Then;
    type IfNibble<Then: Nibble, Else: Nibble> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = True;
    type Not = False;
}

impl Bool for False {
    type If<Then, Else> = Else;
    type Elif<Then: Bool, Else: Bool> = Else;
    type IfNibble<Then: Nibble, Else: Nibble> = Else;

    type And<Other: Bool> = False;
    type Or<Other: Bool> = Other;
    type Not = True;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logic_table() {
        assert!(<<True as Bool>::And<True> as Value>::VALUE);
        assert!(!<<True as Bool>::And<False> as Value>::VALUE);
        assert!(<<False as Bool>::Or<True> as Value>::VALUE);
        assert!(!<<False as Bool>::Or<False> as Value>::VALUE);
        assert!(<<False as Bool>::Not as Value>::VALUE);
    }
}
