//! Parsing of `#[confprint(...)]` field attributes.
//!
//! This module maps attribute syntax to per-field printing options and
//! produces structured errors for invalid forms.

use proc_macro2::Span;
use syn::{meta::ParseNestedMeta, spanned::Spanned, Attribute, Lit, LitStr, Meta, Result};

/// How a field value is turned into text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Render {
    /// `ToString::to_string`, the default.
    Display,
    /// `format!("{:?}")`, selected with `#[confprint(debug)]`.
    Debug,
}

/// Printing options for a single field.
///
/// | Attribute | Effect |
/// |-----------|--------|
/// | None | masked, rendered with `Display` |
/// | `safe`, `safe = true`, `safe = "true"` | printed verbatim |
/// | `safe = <anything else>` | masked |
/// | `rename = "Key"` | printed under `Key` |
/// | `skip` | omitted |
/// | `debug` | rendered with `Debug` |
#[derive(Clone, Debug)]
pub(crate) struct FieldOptions {
    pub(crate) safe: bool,
    pub(crate) rename: Option<LitStr>,
    pub(crate) skip: bool,
    pub(crate) render: Render,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            safe: false,
            rename: None,
            skip: false,
            render: Render::Display,
        }
    }
}

/// Tracks which options were already given so repeats can be rejected.
#[derive(Default)]
struct Seen {
    safe: bool,
    rename: bool,
    skip: bool,
    debug: bool,
}

fn mark(flag: &mut bool, meta: &ParseNestedMeta<'_>, name: &str) -> Result<()> {
    if *flag {
        return Err(meta.error(format!("duplicate `{name}` option on the same field")));
    }
    *flag = true;
    Ok(())
}

/// Reads the value of `safe = ...`.
///
/// Only an explicit `true` (bool or string) exempts the field. Every other
/// literal keeps it masked.
fn parse_safe_value(meta: &ParseNestedMeta<'_>) -> Result<bool> {
    let lit: Lit = meta.value()?.parse()?;
    Ok(match lit {
        Lit::Bool(value) => value.value,
        Lit::Str(value) => value.value() == "true",
        _ => false,
    })
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();
    let mut seen = Seen::default();
    let mut skip_span: Option<Span> = None;

    for attr in attrs {
        if !attr.path().is_ident("confprint") {
            continue;
        }

        let list = match &attr.meta {
            Meta::List(list) => list,
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected options, e.g. #[confprint(safe)]",
                ));
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[confprint]",
                ));
            }
        };

        list.parse_nested_meta(|meta| {
            if meta.path.is_ident("safe") {
                mark(&mut seen.safe, &meta, "safe")?;
                options.safe = if meta.input.peek(syn::Token![=]) {
                    parse_safe_value(&meta)?
                } else {
                    true
                };
                Ok(())
            } else if meta.path.is_ident("rename") {
                mark(&mut seen.rename, &meta, "rename")?;
                let name: LitStr = meta.value()?.parse()?;
                if name.value().is_empty() {
                    return Err(syn::Error::new(name.span(), "`rename` must not be empty"));
                }
                options.rename = Some(name);
                Ok(())
            } else if meta.path.is_ident("skip") {
                mark(&mut seen.skip, &meta, "skip")?;
                options.skip = true;
                skip_span = Some(meta.path.span());
                Ok(())
            } else if meta.path.is_ident("debug") {
                mark(&mut seen.debug, &meta, "debug")?;
                options.render = Render::Debug;
                Ok(())
            } else {
                Err(meta.error(format!(
                    "unknown field option `{}`; expected `safe`, `rename`, `skip` or `debug`",
                    meta.path
                        .get_ident()
                        .map_or_else(|| "?".to_string(), ToString::to_string)
                )))
            }
        })?;
    }

    if let Some(span) = skip_span {
        if seen.safe || seen.rename || seen.debug {
            return Err(syn::Error::new(
                span,
                "`skip` cannot be combined with other #[confprint] options",
            ));
        }
    }

    Ok(options)
}
