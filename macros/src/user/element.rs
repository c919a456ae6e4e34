//! `#[derive(Element)]`
//!
//! A user type gets an identity atom hashed from its full path and the
//! location of the derive (`module_path!()`, the name, `file!()`,
//! `line!()`, `column!()`). Two types with the same name stay distinct
//! whether they live in different modules or in different blocks of one
//! function. Each type parameter is applied
//! to the atom with `App`, which keeps `Wrapper<u8>` and `Wrapper<u16>`
//! apart.
//!
//! Non-generic types also get a `StorageSize` impl lifted from `size_of`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, DeriveInput, GenericParam};

pub fn expand_derive_element(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let ident_str = ident.to_string();

    if let Some(param) = input.generics.const_params().next() {
        return Err(syn::Error::new_spanned(
            param,
            "#[derive(Element)] does not support const generic parameters; implement `Element` by hand",
        ));
    }

    let type_params: Vec<_> = input.generics.type_params().map(|p| p.ident.clone()).collect();

    let mut generics = input.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for p in &type_params {
            where_clause
                .predicates
                .push(parse_quote! { #p: ::tola_typelist::identity::Element });
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut id = quote! {
        ::tola_typelist::__atom!(::core::concat!(
            ::core::module_path!(), "::", #ident_str,
            "@", ::core::file!(), ":", ::core::line!(), ":", ::core::column!()
        ))
    };
    for p in &type_params {
        id = quote! {
            ::tola_typelist::identity::App<#id, <#p as ::tola_typelist::identity::Element>::Id>
        };
    }

    let element = quote! {
        impl #impl_generics ::tola_typelist::identity::Element for #ident #ty_generics #where_clause {
            type Id = #id;
        }
    };

    let has_params = input
        .generics
        .params
        .iter()
        .any(|p| matches!(p, GenericParam::Type(_) | GenericParam::Lifetime(_)));

    let size = if has_params {
        quote! {}
    } else {
        quote! {
            impl ::tola_typelist::identity::StorageSize for #ident {
                type Size = ::tola_typelist::__num!(::core::mem::size_of::<#ident>());
            }
        }
    };

    Ok(quote! {
        #element
        #size
    })
}
