//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added per field type, and only for printed fields whose type
//! mentions one of the container's type parameters:
//!
//! ```ignore
//! #[derive(PrintConfig)]
//! struct Endpoint<T> {
//!     #[confprint(safe)]
//!     port: T,                      // adds `T: Display`
//!     _marker: PhantomData<T>,      // never printed, adds nothing
//! }
//! ```
//!
//! `PhantomData` fields are zero-sized markers with nothing to print, so the
//! derive leaves them out of the report without requiring `skip`.
//!
//! Bounding the field type rather than the parameter keeps wrappers such as
//! `Option<T>` under `#[confprint(debug)]` working: the predicate becomes
//! `Option<T>: Debug`.

use syn::{parse_quote, Type};

use crate::field::Render;

/// Returns `true` for `PhantomData<..>`, including qualified paths such as
/// `std::marker::PhantomData<T>`.
pub(crate) fn is_phantom_data(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "PhantomData")
}

/// Returns `true` if `ty` refers to any type parameter of `generics`.
pub(crate) fn type_uses_generics(ty: &Type, generics: &syn::Generics) -> bool {
    match ty {
        Type::Path(path) => path.path.segments.iter().any(|segment| {
            if generics
                .type_params()
                .any(|param| segment.ident == param.ident)
            {
                return true;
            }
            let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
                return false;
            };
            args.args.iter().any(|arg| match arg {
                syn::GenericArgument::Type(inner) => type_uses_generics(inner, generics),
                _ => false,
            })
        }),
        Type::Reference(reference) => type_uses_generics(&reference.elem, generics),
        Type::Paren(paren) => type_uses_generics(&paren.elem, generics),
        Type::Group(group) => type_uses_generics(&group.elem, generics),
        Type::Array(array) => type_uses_generics(&array.elem, generics),
        Type::Slice(slice) => type_uses_generics(&slice.elem, generics),
        Type::Tuple(tuple) => tuple
            .elems
            .iter()
            .any(|elem| type_uses_generics(elem, generics)),
        _ => false,
    }
}

/// Adds a `Display` or `Debug` predicate for every bounded field type.
pub(crate) fn add_render_bounds(
    mut generics: syn::Generics,
    bounded: &[(Type, Render)],
) -> syn::Generics {
    if bounded.is_empty() {
        return generics;
    }
    let where_clause = generics.make_where_clause();
    for (ty, render) in bounded {
        match render {
            Render::Display => where_clause
                .predicates
                .push(parse_quote!(#ty: ::core::fmt::Display)),
            Render::Debug => where_clause
                .predicates
                .push(parse_quote!(#ty: ::core::fmt::Debug)),
        }
    }
    generics
}
