//! Error types for `sbom_index`.
//!
//! Library code returns [`SbomError`]; the binary maps each variant to an
//! [`ErrorCode`] which carries both a stable machine-readable name and the
//! process exit status.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = SbomError> = std::result::Result<T, E>;

/// Errors surfaced by extraction, storage, configuration and the CLI flows.
#[derive(Error, Debug)]
pub enum SbomError {
    /// The JSON tree is not an SBOM this tool understands.
    #[error("not a recognized SBOM format: {reason}")]
    Format { reason: String },

    /// The input file is not valid JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("specify either --component or --license to query")]
    NoQueryCriteria,

    #[error("document not found: {id}")]
    DocumentNotFound { id: i64 },

    #[error("configuration error: {0}")]
    Config(String),

    /// Any failure reported by SQLite (schema creation, insert, query, locking).
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SbomError {
    /// Build a format error with the given reason.
    #[must_use]
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }

    /// Classify this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Format { .. } => ErrorCode::UnrecognizedFormat,
            Self::InvalidJson { .. } | Self::Json(_) => ErrorCode::InvalidJson,
            Self::FileNotFound { .. } => ErrorCode::FileNotFound,
            Self::NoQueryCriteria => ErrorCode::NoQueryCriteria,
            Self::DocumentNotFound { .. } => ErrorCode::DocumentNotFound,
            Self::Config(_) | Self::Yaml(_) => ErrorCode::ConfigError,
            Self::Storage(_) => ErrorCode::StorageError,
            Self::Io(_) => ErrorCode::IoError,
        }
    }

    /// Remediation hint shown alongside the message, if any.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Format { .. } => {
                Some("the document must be an SPDX JSON object with \"spdxVersion\"")
            }
            Self::NoQueryCriteria => Some("try: sbom-index query --component openssl"),
            Self::DocumentNotFound { .. } => {
                Some("list ingested documents with: sbom-index documents")
            }
            Self::Storage(_) => {
                Some("check the database path and that no other process holds a lock")
            }
            _ => None,
        }
    }

    /// Structured form for `--json` error output.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError {
            code: self.code().as_str(),
            message: self.to_string(),
            hint: self.hint(),
        }
    }
}

/// Stable error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnrecognizedFormat,
    InvalidJson,
    FileNotFound,
    NoQueryCriteria,
    DocumentNotFound,
    ConfigError,
    StorageError,
    IoError,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnrecognizedFormat => "UNRECOGNIZED_FORMAT",
            Self::InvalidJson => "INVALID_JSON",
            Self::FileNotFound => "FILE_NOT_FOUND",
            Self::NoQueryCriteria => "NO_QUERY_CRITERIA",
            Self::DocumentNotFound => "DOCUMENT_NOT_FOUND",
            Self::ConfigError => "CONFIG_ERROR",
            Self::StorageError => "STORAGE_ERROR",
            Self::IoError => "IO_ERROR",
        }
    }

    /// Process exit status for this kind of failure.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::NoQueryCriteria => 2,
            Self::UnrecognizedFormat | Self::InvalidJson => 3,
            Self::StorageError => 4,
            Self::DocumentNotFound | Self::FileNotFound => 5,
            Self::ConfigError | Self::IoError => 1,
        }
    }
}

/// Machine-readable error envelope body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StructuredError {
    pub code: &'static str,
    pub message: String,
    pub hint: Option<&'static str>,
}
