//! Procedural macros for tola-typelist
//!
//! # Macros
//!
//! | Macro | Where | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Element)]` | user struct/enum | Give a type an identity and storage size |
//! | `peano!` | inner | Peano aliases `D0..Dn` |
//! | `const_to_peano!` | inner | `Const<N>` to Peano lookup table |
//! | `nibble_impls!` | inner | Nibble add/compare tables |
//! | `array_impls!` | inner | `Element`/`StorageSize` for `[T; N]` |
//!
//! Inner macros expand to `crate::` paths and are only meant for the
//! `tola-typelist` crate itself.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations (Two-tier: inner / user)
// =============================================================================

mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano number type aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// peano!(64);  // Generates D0 = Z, D1 = S<D0>, ..., D64 = S<D63>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

/// Generate `ToPeano` impls for `Const<0>..=Const<n>`.
#[proc_macro]
pub fn const_to_peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_const_to_peano(input).into()
}

/// Generate `Value` and `Nibble` impls for X0..XF.
#[proc_macro]
pub fn nibble_impls(_input: TokenStream) -> TokenStream {
    inner::nibble::expand_nibble_impls().into()
}

/// Generate `Element` and `StorageSize` for `[T; 0]..=[T; n]`.
#[proc_macro]
pub fn array_impls(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::array::ArrayInput);
    inner::array::expand_array_impls(input).into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive `Element` (and `StorageSize` for non-generic types).
///
/// # Usage
/// ```ignore
/// #[derive(Element)]
/// struct Meters(f64);
///
/// #[derive(Element)]
/// struct Wrapper<T>(T);   // Element where T: Element, no StorageSize
///
/// type L = typelist![Meters, Wrapper<u8>];
/// ```
#[proc_macro_derive(Element)]
pub fn derive_element(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_element(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
