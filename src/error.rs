//! Error types for study generation and export.
//!
//! All errors include enough context to identify the offending enumeration,
//! label, or pivot cell without re-running the pipeline.

use thiserror::Error;

/// Result type alias for comparar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating, ranking, or exporting a study.
#[derive(Error, Debug)]
pub enum Error {
    /// A configured enumeration has no members, so ranking is undefined.
    #[error("enumeration '{field}' is empty; every enumeration needs at least one label")]
    EmptyEnumeration { field: &'static str },

    /// A configured enumeration lists the same label twice.
    #[error("enumeration '{field}' contains duplicate label '{label}'")]
    DuplicateLabel { field: &'static str, label: String },

    /// An observation carries a label that is not part of the configuration.
    #[error("observation references unknown {field} label '{label}'")]
    UnknownLabel { field: &'static str, label: String },

    /// More than one record landed in a single pivot cell.
    #[error(
        "duplicate pivot cell for ({dataset_type}, {analyte}, {algorithm}) metric '{metric}'"
    )]
    DuplicateKey {
        dataset_type: String,
        analyte: String,
        algorithm: String,
        metric: String,
    },

    /// A group lookup found no match; unreachable when the observation set
    /// is a full cartesian product.
    #[error("no group entry for algorithm '{algorithm}' ({context})")]
    MissingGroupKey {
        algorithm: String,
        context: String,
    },

    /// Configuration file could not be read or parsed.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Underlying filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart or table rendering failed.
    #[error("render error: {message}")]
    Render { message: String },

    /// Spreadsheet or csv serialization failed.
    #[error("export error: {message}")]
    Export { message: String },
}

impl Error {
    /// Wrap a drawing-backend failure.
    pub(crate) fn render(err: impl std::fmt::Display) -> Self {
        Self::Render { message: err.to_string() }
    }

    /// Wrap a serialization failure from an export backend.
    pub(crate) fn export(err: impl std::fmt::Display) -> Self {
        Self::Export { message: err.to_string() }
    }
}
