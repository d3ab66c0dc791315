//! Edge-case coverage for masking and report rendering.
//!
//! These tests focus on boundary values of the masking options, on Unicode
//! keys and values, and on sinks that fail.

use std::io::{self, Write};

use confprint::{mask, print, render, FieldList, PrintError, PrinterConfig};

#[test]
fn test_value_exactly_at_threshold_reveals_suffix() {
    let config = PrinterConfig::default().with_min_secret_length_for_suffix(5);
    assert_eq!(mask("abcde", &config), "********cde");
    assert_eq!(mask("abcd", &config), "********");
}

#[test]
fn test_masked_length_is_mask_plus_suffix() {
    let config = PrinterConfig::default()
        .with_mask_length(6)
        .with_visible_suffix_length(4);
    let masked = mask("0123456789abcdefghijklmnop", &config);
    assert_eq!(masked, "******mnop");
    assert_eq!(masked.chars().count(), 10);
}

#[test]
fn test_zero_threshold_reveals_suffix_of_empty_value() {
    let config = PrinterConfig::default().with_min_secret_length_for_suffix(0);
    assert_eq!(mask("", &config), "********");
    assert_eq!(mask("ab", &config), "********ab");
}

#[test]
fn test_all_zero_options() {
    let config = PrinterConfig::default()
        .with_mask_length(0)
        .with_visible_suffix_length(0)
        .with_min_secret_length_for_suffix(0);
    let got = render(&FieldList::new().secret("k", "value"), &config).unwrap();
    assert_eq!(got, "=== Configuration ===\nk: \n");
}

#[test]
fn test_empty_record_prints_header() {
    let got = render(&FieldList::new(), &PrinterConfig::default()).unwrap();
    assert_eq!(got, "=== Configuration ===\n");
}

#[test]
fn test_unicode_keys_are_padded_by_character() {
    let record = FieldList::new().safe("clé", "oui").safe("port", 1);
    let got = render(&record, &PrinterConfig::default()).unwrap();
    assert_eq!(got, "=== Configuration ===\nclé : oui\nport: 1\n");
}

#[test]
fn test_unicode_secret_suffix() {
    let config = PrinterConfig::default().with_min_secret_length_for_suffix(3);
    let got = render(&FieldList::new().secret("token", "ключ🔑"), &config).unwrap();
    assert_eq!(got, "=== Configuration ===\ntoken: ********юч🔑\n");
}

#[test]
fn test_empty_safe_value_keeps_trailing_separator() {
    let got = render(&FieldList::new().safe("name", ""), &PrinterConfig::default()).unwrap();
    assert_eq!(got, "=== Configuration ===\nname: \n");
}

struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_errors_propagate() {
    let err = print(
        &mut FailingSink,
        &FieldList::new().safe("port", 80),
        &PrinterConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PrintError::Io(ref io) if io.kind() == io::ErrorKind::BrokenPipe));
}

#[test]
fn test_dyn_writer_sink() {
    let mut buffer = Vec::new();
    {
        let sink: &mut dyn Write = &mut buffer;
        print(sink, &FieldList::new().safe("a", 1), &PrinterConfig::default()).unwrap();
    }
    assert_eq!(buffer, b"=== Configuration ===\na: 1\n");
}
