//! Adapter for emitting a masked configuration through `slog`.
//!
//! [`MaskedConfig`] is a `slog::KV`: every entry of the report becomes one
//! key/value pair on the log record, with the same masking and ordering as
//! the text report.
//!
//! Logging is infallible from the caller's point of view: if the record
//! cannot be introspected, a single `confprint_error` pair carrying the error
//! message is emitted instead of the entries.

use slog::{Key, Record, Result as SlogResult, Serializer, KV};

use crate::{entries, ConfigRecord, PrinterConfig};

/// Key used when the record cannot be introspected.
pub const ERROR_KEY: &str = "confprint_error";

/// A `slog::KV` that logs the masked fields of a configuration record.
///
/// ## Example
/// ```ignore
/// use confprint::{slog::MaskedConfig, PrinterConfig};
///
/// info!(logger, "starting"; MaskedConfig::new(&config, PrinterConfig::default()));
/// ```
pub struct MaskedConfig<'a, R: ?Sized> {
    record: &'a R,
    config: PrinterConfig,
}

impl<'a, R: ConfigRecord + ?Sized> MaskedConfig<'a, R> {
    /// Wraps `record`, masking with `config`.
    pub fn new(record: &'a R, config: PrinterConfig) -> Self {
        Self { record, config }
    }

    /// Wraps `record`, masking with [`PrinterConfig::default`].
    pub fn with_defaults(record: &'a R) -> Self {
        Self::new(record, PrinterConfig::default())
    }
}

impl<R: ConfigRecord + ?Sized> KV for MaskedConfig<'_, R> {
    fn serialize(&self, _record: &Record<'_>, serializer: &mut dyn Serializer) -> SlogResult {
        match entries(self.record, &self.config) {
            Ok(entries) => {
                for entry in entries {
                    serializer.emit_str(Key::from(entry.key), &entry.value)?;
                }
            }
            Err(err) => {
                serializer.emit_arguments(Key::from(ERROR_KEY), &format_args!("{err}"))?;
            }
        }
        Ok(())
    }
}
