//! Introspection of `Serialize` values through `serde_json`.
//!
//! This module exists for records that cannot derive `PrintConfig`, such as
//! configuration types from another crate. The value is converted into a
//! `serde_json::Value` and its top-level object keys become the printed
//! fields.
//!
//! Anything that does not serialize to a JSON object is rejected with
//! [`PrintError::InvalidInputKind`].

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::{ConfigField, ConfigRecord, PrintError};

/// A `Serialize` value viewed as a configuration record.
///
/// Every field is masked unless listed in [`SerializedRecord::safe_fields`].
///
/// ```rust
/// use confprint::{render, PrinterConfig, SerializedRecord};
///
/// #[derive(serde::Serialize)]
/// struct Database {
///     host: String,
///     password: String,
/// }
///
/// let db = Database {
///     host: "localhost".into(),
///     password: "hunter2".into(),
/// };
/// let record = SerializedRecord::new(&db).safe_fields(["host"]);
/// let report = render(&record, &PrinterConfig::default()).unwrap();
/// assert_eq!(
///     report,
///     "=== Configuration ===\nhost    : localhost\npassword: ********\n"
/// );
/// ```
#[derive(Debug)]
pub struct SerializedRecord<'a, T: ?Sized> {
    value: &'a T,
    safe_fields: BTreeSet<String>,
}

impl<'a, T: Serialize + ?Sized> SerializedRecord<'a, T> {
    /// Wraps `value`; all of its fields start out masked.
    pub fn new(value: &'a T) -> Self {
        Self {
            value,
            safe_fields: BTreeSet::new(),
        }
    }

    /// Marks the named top-level fields as safe to print verbatim.
    #[must_use]
    pub fn safe_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.safe_fields.extend(names.into_iter().map(Into::into));
        self
    }
}

impl<T: Serialize + ?Sized> ConfigRecord for SerializedRecord<'_, T> {
    fn config_fields(&self) -> Result<Vec<ConfigField>, PrintError> {
        let json = serde_json::to_value(self.value).map_err(|err| {
            PrintError::invalid_input_kind(format!("a value that failed to serialize ({err})"))
        })?;
        let map = match json {
            JsonValue::Object(map) => map,
            other => return Err(PrintError::invalid_input_kind(json_kind(&other))),
        };

        Ok(map
            .into_iter()
            .map(|(name, value)| {
                let safe = self.safe_fields.contains(&name);
                ConfigField::new(name, render_json(value), safe)
            })
            .collect())
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Scalars render as their plain text; nested values as compact JSON.
fn render_json(value: JsonValue) -> String {
    match value {
        JsonValue::String(text) => text,
        JsonValue::Null => "null".to_string(),
        other => other.to_string(),
    }
}
