//! Print configuration structs with their secrets masked.
//!
//! The crate renders a configuration record as an aligned `key: value` report,
//! masking every value that is not explicitly marked safe:
//!
//! ```text
//! === Configuration ===
//! APIKey     : ********123
//! Environment: development
//! Port       : 8080
//! SecretKey  : ********
//! ```
//!
//! Key rules:
//! - Unannotated fields are secret. Only `#[confprint(safe)]` (or an explicit
//!   `safe = true`) prints a value verbatim.
//! - Secrets become a fixed run of `*`; values at least
//!   `min_secret_length_for_suffix` characters long also keep their last
//!   `visible_suffix_length` characters.
//! - Entries are sorted by key and the `: ` column is aligned.
//!
//! Records come from:
//! - `#[derive(PrintConfig)]` on a struct with named fields,
//! - [`FieldList`], for records assembled at runtime,
//! - [`SerializedRecord`] (feature `serde`), for any `Serialize` type.
//!
//! ```rust
//! use confprint::{print, PrintConfig, PrinterConfig};
//!
//! #[derive(PrintConfig)]
//! struct Config {
//!     #[confprint(rename = "APIKey")]
//!     api_key: String,
//!     #[confprint(rename = "Port", safe)]
//!     port: u16,
//! }
//!
//! let config = Config {
//!     api_key: "very-long-secret-key-123".into(),
//!     port: 8080,
//! };
//! let mut out = Vec::new();
//! print(&mut out, &config, &PrinterConfig::default()).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "=== Configuration ===\nAPIKey: ********123\nPort  : 8080\n"
//! );
//! ```
//!
//! What it does not do:
//! - read configuration from files or the environment
//! - validate configuration values
//! - walk into nested structures; each field is rendered as one value
//!
//! The `PrintConfig` derive macro lives in `confprint-derive` and is re-exported
//! here. A `slog` adapter is available behind the `slog` feature.

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

pub use confprint_derive::PrintConfig;

#[allow(unused_extern_crates)]
extern crate self as confprint;

// Module declarations
mod error;
mod printer;
mod record;
#[cfg(feature = "serde")]
mod serialized;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use error::PrintError;
pub use printer::{
    entries, mask, print, print_default, render, FieldEntry, PrinterConfig,
    DEFAULT_MASK_LENGTH, DEFAULT_MIN_SECRET_LENGTH_FOR_SUFFIX, DEFAULT_VISIBLE_SUFFIX_LENGTH,
    MASK_CHAR, REPORT_HEADER,
};
pub use record::{ConfigField, ConfigRecord, FieldList};
#[cfg(feature = "serde")]
pub use serialized::SerializedRecord;
