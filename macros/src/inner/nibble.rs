//! Nibble arithmetic tables.
//!
//! Every nibble `Xa` fills in the 48 dispatch slots declared on `Nibble`:
//! `__SumK = X[(K + a) mod 16]`, `__OvfK = K + a >= 16`, `__CmpK = cmp(K, a)`.
//! The public GATs then forward to the other operand's slot.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

const HEX: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

fn nibble(v: usize) -> Ident {
    Ident::new(&format!("X{}", HEX[v % 16]), Span::call_site())
}

fn slot(kind: &str, k: usize) -> Ident {
    Ident::new(&format!("__{}{}", kind, HEX[k]), Span::call_site())
}

fn boolean(b: bool) -> TokenStream {
    if b {
        quote! { crate::primitives::bool::True }
    } else {
        quote! { crate::primitives::bool::False }
    }
}

fn ordering(a: usize, b: usize) -> TokenStream {
    match a.cmp(&b) {
        core::cmp::Ordering::Less => quote! { crate::primitives::ordering::Less },
        core::cmp::Ordering::Equal => quote! { crate::primitives::ordering::Equal },
        core::cmp::Ordering::Greater => quote! { crate::primitives::ordering::Greater },
    }
}

fn expand_one(a: usize) -> TokenStream {
    let this = nibble(a);
    let value = a as u8;
    let succ = nibble(a + 1);
    let is_max = boolean(a == 15);

    let sum_own = slot("Sum", a);
    let ovf_own = slot("Ovf", a);
    let cmp_own = slot("Cmp", a);

    let slots = (0..16).map(|k| {
        let sum = slot("Sum", k);
        let ovf = slot("Ovf", k);
        let cmp = slot("Cmp", k);
        let sum_out = nibble(k + a);
        let ovf_out = boolean(k + a >= 16);
        let cmp_out = ordering(k, a);
        quote! {
            type #sum = #sum_out;
            type #ovf = #ovf_out;
            type #cmp = #cmp_out;
        }
    });

    quote! {
        impl Value for #this {
            type Type = u8;
            const VALUE: u8 = #value;
        }

        impl Nibble for #this {
            type Succ = #succ;
            type IsMax = #is_max;
            type Plus<O: Nibble> = <O as Nibble>::#sum_own;
            type Overflows<O: Nibble> = <O as Nibble>::#ovf_own;
            type Cmp<O: Nibble> = <O as Nibble>::#cmp_own;
            type Eq<O: Nibble> = <<O as Nibble>::#cmp_own as crate::primitives::ordering::Ordering>::IsEqual;

            #(#slots)*
        }
    }
}

pub fn expand_nibble_impls() -> TokenStream {
    let impls = (0..16).map(expand_one);
    quote! { #(#impls)* }
}
