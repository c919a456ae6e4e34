//! Peano number generation macros.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, Ident, LitInt};

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(PeanoInput { max })
    }
}

fn digit(n: usize) -> Ident {
    Ident::new(&format!("D{}", n), Span::call_site())
}

/// `D0 = Z`, `Dn = S<D(n-1)>` up to `max`.
pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let mut types = vec![quote! {
        /// Peano `0`.
        pub type D0 = Z;
    }];

    for n in 1..=input.max {
        let curr = digit(n);
        let prev = digit(n - 1);
        let doc = format!("Peano `{}`.", n);
        types.push(quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
        });
    }

    quote! { #(#types)* }
}

/// `impl ToPeano for Const<n> { type Out = Dn; }` up to `max`.
///
/// Expects `Const`, `ToPeano` and the `D*` aliases in scope.
pub fn expand_const_to_peano(input: PeanoInput) -> TokenStream {
    let impls = (0..=input.max).map(|n| {
        let d = digit(n);
        quote! {
            impl ToPeano for Const<#n> { type Out = #d; }
        }
    });

    quote! { #(#impls)* }
}
