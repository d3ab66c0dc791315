//! Derive macros for `confprint`.
//!
//! This crate generates the field walk behind `#[derive(PrintConfig)]`. It:
//! - reads `#[confprint(...)]` field attributes
//! - emits a `ConfigRecord` implementation that renders each field to text
//!
//! It does **not** mask or format anything. Masking and the report layout live
//! in the main `confprint` crate and are applied at print time.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Result};

mod derive_struct;
mod field;
mod generics;
use derive_struct::derive_struct;
use generics::add_render_bounds;

/// Derives `confprint::ConfigRecord` for structs with named fields.
///
/// # Field Attributes
///
/// - **No annotation**: the field is treated as secret and masked when printed.
///
/// - `#[confprint(safe)]`: the field is printed verbatim. `safe = true` and
///   `safe = "true"` are equivalent; any other value (`safe = false`,
///   `safe = "yes"`, ...) leaves the field masked.
///
/// - `#[confprint(rename = "Key")]`: print the field under `Key` instead of its
///   identifier.
///
/// - `#[confprint(skip)]`: leave the field out of the report. Cannot be combined
///   with other options.
///
/// - `#[confprint(debug)]`: render the value with `Debug` instead of `Display`.
///   Useful for `Option`, `PathBuf` and similar types.
///
/// `PhantomData` fields are never printed and need no annotation.
///
/// Printed fields must implement `Display` (or `Debug` with `debug`). Enums,
/// unions and tuple structs are rejected at compile time, as are duplicate
/// printed keys.
#[proc_macro_derive(PrintConfig, attributes(confprint))]
pub fn derive_print_config(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the confprint crate root.
///
/// Handles crate renaming (e.g., `cfgout = { package = "confprint", ... }`).
/// Inside the confprint package itself (its lib, doctests and integration
/// tests) the absolute `::confprint` path is used; the lib makes that path
/// resolve with `extern crate self as confprint`.
fn crate_root() -> TokenStream {
    match crate_name("confprint") {
        Ok(FoundCrate::Itself) => quote! { ::confprint },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::confprint },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    let data = match data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "`PrintConfig` cannot be derived for enums; a configuration record needs named fields",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "`PrintConfig` cannot be derived for unions",
            ));
        }
    };

    let output = derive_struct(data, &generics)?;
    let generics = add_render_bounds(generics, &output.bounded);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let record_path = crate_path("ConfigRecord");
    let field_path = crate_path("ConfigField");
    let error_path = crate_path("PrintError");
    let fields_body = output.fields_body;

    Ok(quote! {
        impl #impl_generics #record_path for #ident #ty_generics #where_clause {
            fn config_fields(
                &self,
            ) -> ::core::result::Result<::std::vec::Vec<#field_path>, #error_path> {
                #fields_body
            }
        }
    })
}
