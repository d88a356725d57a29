//! Error types for end-to-end generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for loading a schema and writing generated types.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// XML document parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] wsdl2ts_schema::ParseError),

    /// Schema normalization or validation error.
    #[error("schema error: {0}")]
    Schema(#[from] wsdl2ts_schema::SchemaError),

    /// Code generation error.
    #[error("codegen error: {0}")]
    Codegen(#[from] wsdl2ts_codegen::CodegenError),

    /// IO error on a specific file.
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Requested built-in schema version does not exist.
    #[error("unknown metadata version '{version}', supported: {supported}")]
    UnknownVersion {
        /// Requested version.
        version: String,
        /// Comma-separated supported versions.
        supported: String,
    },
}

impl GenerateError {
    /// Creates an IO error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
