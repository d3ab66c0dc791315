//! Errors returned by the printing entrypoints.

use std::io;

use thiserror::Error;

/// Failure of a print call.
///
/// `InvalidInputKind` is the only data error: it is raised before anything is
/// written, so a failed call never leaves a partial report in the sink.
#[derive(Debug, Error)]
pub enum PrintError {
    /// The record did not resolve to a structure with named fields.
    #[error("configuration must be a struct with named fields, found {found}")]
    InvalidInputKind {
        /// Human-readable kind of the value that was supplied instead.
        found: String,
    },
    /// The sink rejected the report.
    #[error("failed to write configuration report")]
    Io(#[from] io::Error),
}

impl PrintError {
    /// Constructs [`PrintError::InvalidInputKind`].
    pub fn invalid_input_kind(found: impl Into<String>) -> Self {
        Self::InvalidInputKind {
            found: found.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PrintError;

    #[test]
    fn invalid_input_kind_names_what_was_found() {
        let err = PrintError::invalid_input_kind("a string");
        assert_eq!(
            err.to_string(),
            "configuration must be a struct with named fields, found a string"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = PrintError::from(io);
        assert!(matches!(err, PrintError::Io(_)));
    }
}
