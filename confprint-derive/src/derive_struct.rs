//! Struct-specific `ConfigRecord` derivation.
//!
//! This module generates the field walk for named structs and collects the
//! field types that need `Display`/`Debug` bounds.

use std::collections::BTreeMap;

use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{ext::IdentExt, spanned::Spanned, DataStruct, Fields, Result, Type};

use crate::{
    crate_path,
    field::{parse_field_options, Render},
    generics::{is_phantom_data, type_uses_generics},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) fields_body: TokenStream,
    pub(crate) bounded: Vec<(Type, Render)>,
}

pub(crate) fn derive_struct(
    data: DataStruct,
    generics: &syn::Generics,
) -> Result<StructDeriveOutput> {
    match data.fields {
        Fields::Named(fields) => derive_named_struct(fields, generics),
        Fields::Unnamed(fields) => Err(syn::Error::new(
            fields.span(),
            "`PrintConfig` requires named fields; tuple structs have no field names to print",
        )),
        Fields::Unit => Ok(StructDeriveOutput {
            fields_body: quote! {
                ::core::result::Result::Ok(::std::vec::Vec::new())
            },
            bounded: Vec::new(),
        }),
    }
}

fn derive_named_struct(
    fields: syn::FieldsNamed,
    generics: &syn::Generics,
) -> Result<StructDeriveOutput> {
    let field_path = crate_path("ConfigField");
    let mut pushes = Vec::new();
    let mut bounded = Vec::new();
    let mut keys: BTreeMap<String, Span> = BTreeMap::new();

    for field in fields.named {
        let span = field.span();
        let options = parse_field_options(&field.attrs)?;
        if options.skip || is_phantom_data(&field.ty) {
            continue;
        }
        let ident = field.ident.expect("named field should have an identifier");

        let (key, key_span) = match &options.rename {
            Some(rename) => (rename.value(), rename.span()),
            None => (ident.unraw().to_string(), ident.span()),
        };
        if keys.insert(key.clone(), key_span).is_some() {
            return Err(syn::Error::new(
                key_span,
                format!("duplicate printed key `{key}`"),
            ));
        }

        let value = match options.render {
            Render::Display => quote_spanned! { span =>
                ::std::string::ToString::to_string(&self.#ident)
            },
            Render::Debug => quote_spanned! { span =>
                ::std::format!("{:?}", &self.#ident)
            },
        };
        let safe = options.safe;
        pushes.push(quote_spanned! { span =>
            fields.push(#field_path::new(#key, #value, #safe));
        });

        if type_uses_generics(&field.ty, generics) {
            bounded.push((field.ty, options.render));
        }
    }

    let capacity = pushes.len();
    Ok(StructDeriveOutput {
        fields_body: quote! {
            let mut fields = ::std::vec::Vec::with_capacity(#capacity);
            #(#pushes)*
            ::core::result::Result::Ok(fields)
        },
        bounded,
    })
}
