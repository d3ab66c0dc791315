//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `MaskedConfig` emits one key/value pair per report entry
//! - values are masked exactly as in the text report
//! - introspection failures become a single error pair

#![cfg(feature = "slog")]

use std::{cell::RefCell, fmt::Arguments};

use confprint::{
    slog::{MaskedConfig, ERROR_KEY},
    ConfigField, ConfigRecord, FieldList, PrintConfig, PrintError, PrinterConfig,
};
use slog::KV;

// A test serializer that captures serialized key-value pairs in order
struct CapturingSerializer {
    captured: RefCell<Vec<(String, String)>>,
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(Vec::new()),
        }
    }

    fn pairs(&self) -> Vec<(String, String)> {
        self.captured.borrow().clone()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .push((key.into(), val.to_string()));
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured.borrow_mut().push((key.into(), val.into()));
        Ok(())
    }
}

/// Helper function to serialize a slog::KV into the capturing serializer.
fn serialize_to_capture<V: KV>(value: &V, serializer: &mut CapturingSerializer) {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, serializer).unwrap();
}

#[derive(PrintConfig)]
struct ServerConfig {
    #[confprint(safe)]
    port: u16,
    token: String,
    #[confprint(safe)]
    host: String,
}

fn pair(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}

#[test]
fn test_masked_config_emits_sorted_masked_pairs() {
    let config = ServerConfig {
        port: 8080,
        token: "very-long-secret-key-123".into(),
        host: "localhost".into(),
    };
    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&MaskedConfig::with_defaults(&config), &mut serializer);
    assert_eq!(
        serializer.pairs(),
        [
            pair("host", "localhost"),
            pair("port", "8080"),
            pair("token", "********123"),
        ]
    );
}

#[test]
fn test_masked_config_uses_printer_options() {
    let record = FieldList::new().secret("password", "hunter2");
    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(
        &MaskedConfig::new(&record, PrinterConfig::default().with_mask_length(3)),
        &mut serializer,
    );
    assert_eq!(serializer.pairs(), [pair("password", "***")]);
}

#[test]
fn test_introspection_failure_emits_error_pair() {
    struct Broken;

    impl ConfigRecord for Broken {
        fn config_fields(&self) -> Result<Vec<ConfigField>, PrintError> {
            Err(PrintError::invalid_input_kind("a broken record"))
        }
    }

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&MaskedConfig::with_defaults(&Broken), &mut serializer);
    assert_eq!(
        serializer.pairs(),
        [pair(
            ERROR_KEY,
            "configuration must be a struct with named fields, found a broken record"
        )]
    );
}

