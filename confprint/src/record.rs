//! Field introspection: how a configuration record exposes its fields.
//!
//! - [`ConfigRecord`]: anything that can list its named fields
//! - [`ConfigField`]: one field's key, rendered value and safe marker
//! - [`FieldList`]: an explicit, hand-built record
//!
//! Records are normally produced by `#[derive(PrintConfig)]`. `FieldList`
//! covers records assembled at runtime, and `SerializedRecord` (feature
//! `serde`) covers any `Serialize` type.

use std::{borrow::Cow, fmt::Display, rc::Rc, sync::Arc};

use crate::PrintError;

/// One introspected field before masking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigField {
    name: Cow<'static, str>,
    value: String,
    safe: bool,
}

impl ConfigField {
    /// Creates a field. `safe` exempts the value from masking.
    pub fn new(name: impl Into<Cow<'static, str>>, value: String, safe: bool) -> Self {
        Self {
            name: name.into(),
            value,
            safe,
        }
    }

    /// The key printed in the report.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unmasked text of the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value is printed verbatim.
    pub fn is_safe(&self) -> bool {
        self.safe
    }

    pub(crate) fn into_parts(self) -> (Cow<'static, str>, String, bool) {
        (self.name, self.value, self.safe)
    }
}

/// A structured value whose named fields can be printed.
///
/// Implementations return the fields in declaration order; the printer sorts
/// them. Returning [`PrintError::InvalidInputKind`] aborts the print call
/// before anything is written.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a configuration record",
    label = "this value has no named fields to print",
    note = "use `#[derive(PrintConfig)]` on a struct with named fields",
    note = "or build the record explicitly with `confprint::FieldList`"
)]
pub trait ConfigRecord {
    /// Lists the record's fields with their values rendered to text.
    fn config_fields(&self) -> Result<Vec<ConfigField>, PrintError>;
}

impl<T: ConfigRecord + ?Sized> ConfigRecord for &T {
    fn config_fields(&self) -> Result<Vec<ConfigField>, PrintError> {
        (**self).config_fields()
    }
}

impl<T: ConfigRecord + ?Sized> ConfigRecord for &mut T {
    fn config_fields(&self) -> Result<Vec<ConfigField>, PrintError> {
        (**self).config_fields()
    }
}

impl<T: ConfigRecord + ?Sized> ConfigRecord for Box<T> {
    fn config_fields(&self) -> Result<Vec<ConfigField>, PrintError> {
        (**self).config_fields()
    }
}

impl<T: ConfigRecord + ?Sized> ConfigRecord for Rc<T> {
    fn config_fields(&self) -> Result<Vec<ConfigField>, PrintError> {
        (**self).config_fields()
    }
}

impl<T: ConfigRecord + ?Sized> ConfigRecord for Arc<T> {
    fn config_fields(&self) -> Result<Vec<ConfigField>, PrintError> {
        (**self).config_fields()
    }
}

/// A record given as explicit `(name, value, safe)` triples.
///
/// ```rust
/// use confprint::{render, FieldList, PrinterConfig};
///
/// let record = FieldList::new()
///     .safe("Port", 8080)
///     .secret("Token", "abc");
/// let report = render(&record, &PrinterConfig::default()).unwrap();
/// assert_eq!(report, "=== Configuration ===\nPort : 8080\nToken: ********\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldList {
    fields: Vec<ConfigField>,
}

impl FieldList {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, rendering `value` with `Display`.
    #[must_use]
    pub fn field(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Display,
        safe: bool,
    ) -> Self {
        self.push(name, value, safe);
        self
    }

    /// Appends a field that is printed verbatim.
    #[must_use]
    pub fn safe(self, name: impl Into<Cow<'static, str>>, value: impl Display) -> Self {
        self.field(name, value, true)
    }

    /// Appends a field that is masked.
    #[must_use]
    pub fn secret(self, name: impl Into<Cow<'static, str>>, value: impl Display) -> Self {
        self.field(name, value, false)
    }

    /// Appends a field in place.
    pub fn push(&mut self, name: impl Into<Cow<'static, str>>, value: impl Display, safe: bool) {
        self.fields
            .push(ConfigField::new(name, value.to_string(), safe));
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl ConfigRecord for FieldList {
    fn config_fields(&self) -> Result<Vec<ConfigField>, PrintError> {
        Ok(self.fields.clone())
    }
}

impl Extend<ConfigField> for FieldList {
    fn extend<I: IntoIterator<Item = ConfigField>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}

impl FromIterator<ConfigField> for FieldList {
    fn from_iter<I: IntoIterator<Item = ConfigField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
