//! Masking policy and the aligned text report.
//!
//! The report layout is fixed:
//!
//! ```text
//! === Configuration ===
//! APIKey     : ********123
//! Environment: development
//! ```
//!
//! Entries are sorted by key and the `: ` column is aligned to the longest key
//! of the record being printed.

use std::io::Write;

use crate::{ConfigRecord, PrintError};

/// First line of every report.
pub const REPORT_HEADER: &str = "=== Configuration ===";

/// Character used for the mask segment.
pub const MASK_CHAR: char = '*';

/// Default number of mask characters.
pub const DEFAULT_MASK_LENGTH: usize = 8;
/// Default number of trailing characters revealed for long secrets.
pub const DEFAULT_VISIBLE_SUFFIX_LENGTH: usize = 3;
/// Default value length at which the suffix starts being revealed.
pub const DEFAULT_MIN_SECRET_LENGTH_FOR_SUFFIX: usize = 20;

/// Options controlling how secret values are masked.
///
/// Built with [`PrinterConfig::default`] and the `with_*` methods; each method
/// overrides exactly one default and the order of calls does not matter.
///
/// Lengths count Unicode scalar values, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrinterConfig {
    /// Number of `*` characters in the mask segment.
    mask_length: usize,
    /// Number of trailing characters revealed when the value is long enough.
    visible_suffix_length: usize,
    /// Value length at or above which the suffix is revealed.
    min_secret_length_for_suffix: usize,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            mask_length: DEFAULT_MASK_LENGTH,
            visible_suffix_length: DEFAULT_VISIBLE_SUFFIX_LENGTH,
            min_secret_length_for_suffix: DEFAULT_MIN_SECRET_LENGTH_FOR_SUFFIX,
        }
    }
}

impl PrinterConfig {
    /// Sets the number of `*` characters in the mask segment.
    #[must_use]
    pub fn with_mask_length(mut self, mask_length: usize) -> Self {
        self.mask_length = mask_length;
        self
    }

    /// Sets how many trailing characters are revealed for long values.
    #[must_use]
    pub fn with_visible_suffix_length(mut self, visible_suffix_length: usize) -> Self {
        self.visible_suffix_length = visible_suffix_length;
        self
    }

    /// Sets the value length at or above which the suffix is revealed.
    #[must_use]
    pub fn with_min_secret_length_for_suffix(mut self, min_secret_length: usize) -> Self {
        self.min_secret_length_for_suffix = min_secret_length;
        self
    }

    /// Number of `*` characters in the mask segment.
    pub fn mask_length(&self) -> usize {
        self.mask_length
    }

    /// Number of trailing characters revealed for long values.
    pub fn visible_suffix_length(&self) -> usize {
        self.visible_suffix_length
    }

    /// Value length at or above which the suffix is revealed.
    pub fn min_secret_length_for_suffix(&self) -> usize {
        self.min_secret_length_for_suffix
    }

    /// Applies [`mask`] with this configuration.
    #[must_use]
    pub fn mask(&self, value: &str) -> String {
        mask(value, self)
    }
}

/// Masks a secret value.
///
/// Values shorter than `min_secret_length_for_suffix` become `mask_length`
/// asterisks. Longer values additionally keep their last
/// `visible_suffix_length` characters, clamped to the whole value.
///
/// This function is total: zero lengths and empty values are valid input.
#[must_use]
pub fn mask(value: &str, config: &PrinterConfig) -> String {
    let total = value.chars().count();
    let mut masked: String = std::iter::repeat_n(MASK_CHAR, config.mask_length).collect();

    if total >= config.min_secret_length_for_suffix {
        let keep = config.visible_suffix_length.min(total);
        let start = value
            .char_indices()
            .nth(total - keep)
            .map_or(value.len(), |(index, _)| index);
        masked.push_str(&value[start..]);
    }
    masked
}

/// One line of the report: a key and its final, possibly masked, value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEntry {
    /// Field name as printed.
    pub key: String,
    /// Value after masking, or verbatim for safe fields.
    pub value: String,
}

/// Introspects `record`, masks its sensitive fields and sorts the result by key.
pub fn entries<R>(record: &R, config: &PrinterConfig) -> Result<Vec<FieldEntry>, PrintError>
where
    R: ConfigRecord + ?Sized,
{
    let mut entries: Vec<FieldEntry> = record
        .config_fields()?
        .into_iter()
        .map(|field| {
            let (name, value, safe) = field.into_parts();
            let value = if safe { value } else { mask(&value, config) };
            FieldEntry {
                key: name.into_owned(),
                value,
            }
        })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(entries)
}

/// Renders the full report, header included, into a `String`.
pub fn render<R>(record: &R, config: &PrinterConfig) -> Result<String, PrintError>
where
    R: ConfigRecord + ?Sized,
{
    let entries = entries(record, config)?;
    let width = entries
        .iter()
        .map(|entry| entry.key.chars().count())
        .max()
        .unwrap_or(0);

    let mut report = String::new();
    report.push_str(REPORT_HEADER);
    report.push('\n');
    for entry in &entries {
        report.push_str(&entry.key);
        let padding = width - entry.key.chars().count();
        report.extend(std::iter::repeat_n(' ', padding));
        report.push_str(": ");
        report.push_str(&entry.value);
        report.push('\n');
    }
    Ok(report)
}

/// Writes the masked report for `record` to `sink`.
///
/// The report is assembled in memory first, so an
/// [`PrintError::InvalidInputKind`] leaves the sink untouched.
pub fn print<W, R>(sink: &mut W, record: &R, config: &PrinterConfig) -> Result<(), PrintError>
where
    W: Write + ?Sized,
    R: ConfigRecord + ?Sized,
{
    let report = render(record, config)?;
    sink.write_all(report.as_bytes())?;
    Ok(())
}

/// [`print`] with [`PrinterConfig::default`].
pub fn print_default<W, R>(sink: &mut W, record: &R) -> Result<(), PrintError>
where
    W: Write + ?Sized,
    R: ConfigRecord + ?Sized,
{
    print(sink, record, &PrinterConfig::default())
}
