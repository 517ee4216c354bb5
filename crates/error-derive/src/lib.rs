//! `#[derive(Error)]` for error enums.
//!
//! Every variant needs a `#[msg = "..."]` attribute, which becomes its [Display](std::fmt::Display) output.
//!
//! * Unit variants print the message as-is.
//! * Variants with exactly one unnamed field wrap another error. They get a `From` impl
//!   and report the wrapped value as their `source`.
//! * Variants with named fields may refer to those fields inside the message, like
//!   `#[msg = "missing field {field}"]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

#[proc_macro_derive(Error, attributes(msg))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    let item: syn::ItemEnum = syn::parse(input).expect("Could not parse input as enum");

    let name = item.ident;
    let mut variant_displays = vec![];
    let mut from_impls = vec![];
    let mut variant_sources = vec![];

    for variant in &item.variants {
        let ident = &variant.ident;

        let Some(display_value) = message_attribute(variant) else {
            panic!("variant {ident} needs a #[msg = \"...\"] attribute");
        };

        match &variant.fields {
            syn::Fields::Unit => {
                variant_displays.push(quote!(
                    Self::#ident => ::std::fmt::Display::fmt(&(#display_value), f)
                ));
            },
            syn::Fields::Unnamed(unnamed_fields) => {
                if unnamed_fields.unnamed.len() != 1 {
                    panic!("Need exactly one field");
                }

                let field = &unnamed_fields.unnamed[0];
                let ty = &field.ty;

                from_impls.push(quote!(
                    #[automatically_derived]
                    impl From<#ty> for #name {
                        fn from(value: #ty) -> Self {
                            Self::#ident(value)
                        }
                    }
                ));
                variant_displays.push(quote!(
                    Self::#ident(_) => ::std::fmt::Display::fmt(&(#display_value), f)
                ));
                variant_sources.push(quote!(Self::#ident(ref value) => Some(value)));
            },
            syn::Fields::Named(named_fields) => {
                variant_displays.push(display_named_fields(
                    ident,
                    named_fields,
                    display_value,
                ));
            },
        }
    }

    quote!(
        #[automatically_derived]
        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> Result<(), ::std::fmt::Error> {
                match self {
                    #(
                        #variant_displays,
                    )*
                }
            }
        }

        #(
            #from_impls
        )*

        #[automatically_derived]
        impl ::std::error::Error for #name {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    #(
                        #variant_sources,
                    )*
                    _ => None,
                }
            }
        }
    )
    .into()
}

fn message_attribute(variant: &syn::Variant) -> Option<&syn::Expr> {
    variant
        .attrs
        .iter()
        .flat_map(|attr| match &attr.meta {
            syn::Meta::NameValue(name_value) => Some(name_value),
            _ => None,
        })
        .find(|name_value| name_value.path.is_ident("msg"))
        .map(|name_value| &name_value.value)
}

/// Format a variant with named fields, passing only the fields that the
/// message actually mentions as format arguments
fn display_named_fields(
    ident: &syn::Ident,
    fields: &syn::FieldsNamed,
    display_value: &syn::Expr,
) -> TokenStream2 {
    let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(message),
        ..
    }) = display_value
    else {
        panic!("messages of variants with named fields must be string literals");
    };

    let message_text = message.value();
    let referenced_fields: Vec<&syn::Ident> = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .filter(|field_name| {
            let placeholder = format!("{{{field_name}");
            message_text
                .match_indices(&placeholder)
                .any(|(index, _)| {
                    matches!(
                        message_text[index + placeholder.len()..].chars().next(),
                        Some('}' | ':')
                    )
                })
        })
        .collect();

    quote!(
        Self::#ident { #(#referenced_fields,)* .. } => {
            write!(f, #message #(, #referenced_fields = #referenced_fields)*)
        }
    )
}
