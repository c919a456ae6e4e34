//! Element and storage-size impls for fixed-size arrays.
//!
//! The size of `[T; N]` cannot go through `size_of` (it mentions `T`), so
//! it is built from `T::Size` by binary doubling: Horner's rule over the
//! bits of `N`, most significant first.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, LitInt};

pub struct ArrayInput {
    pub max: usize,
}

impl Parse for ArrayInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max > 256 {
            return Err(syn::Error::new(lit.span(), "array impls are limited to 256 elements"));
        }
        Ok(ArrayInput { max })
    }
}

/// `T::Size * n` as a `Number` type expression.
fn scaled_size(n: usize) -> TokenStream {
    let unit = quote! { <T as crate::identity::StorageSize>::Size };
    if n == 0 {
        return quote! { crate::primitives::number::U0 };
    }

    let bits = usize::BITS - n.leading_zeros();
    let mut acc = unit.clone();
    for bit in (0..bits - 1).rev() {
        acc = quote! { <#acc as crate::primitives::number::Number>::Double };
        if n & (1 << bit) != 0 {
            acc = quote! { <#acc as crate::primitives::number::Number>::Plus<#unit> };
        }
    }
    acc
}

pub fn expand_array_impls(input: ArrayInput) -> TokenStream {
    let impls = (0..=input.max).map(|n| {
        let name = format!("[_; {}]", n);
        let size = scaled_size(n);
        quote! {
            impl<T: crate::identity::Element> crate::identity::Element for [T; #n] {
                type Id = crate::identity::App<crate::__atom!(#name), <T as crate::identity::Element>::Id>;
            }

            impl<T: crate::identity::StorageSize> crate::identity::StorageSize for [T; #n] {
                type Size = #size;
            }
        }
    });

    quote! { #(#impls)* }
}
