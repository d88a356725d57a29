//! Error types for XML reading and schema normalization.

use thiserror::Error;

/// Error type for building the XML document tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed character or entity reference in an attribute value.
    #[error("invalid escape sequence: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// Invalid document structure (unbalanced tags, no root element).
    #[error("invalid document structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for schema normalization and IR validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A node required to reach the schema is missing.
    #[error("missing schema node '{path}'")]
    MissingNode {
        /// Navigation path of the missing node.
        path: String,
    },

    /// A type or base reference carries an unrecognized namespace prefix.
    #[error("unknown type reference '{reference}'")]
    UnknownTypeReference {
        /// The reference as written in the schema.
        reference: String,
    },

    /// A simple type restriction has neither an enumeration nor a base.
    #[error("simple type '{name}' has neither enumerations nor a base")]
    MalformedSimpleType {
        /// Simple type name.
        name: String,
    },

    /// A complex type extends a base that is not declared.
    #[error("complex type '{name}' extends unknown base '{base}'")]
    UnresolvedBase {
        /// Complex type name.
        name: String,
        /// Base type name.
        base: String,
    },

    /// Circular inheritance chain.
    #[error("circular type reference detected: {path}")]
    CircularReference {
        /// Path of the circular reference.
        path: String,
    },
}

impl ParseError {
    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a missing node error.
    pub fn missing_node(path: impl Into<String>) -> Self {
        Self::MissingNode { path: path.into() }
    }

    /// Creates an unknown type reference error.
    pub fn unknown_reference(reference: impl Into<String>) -> Self {
        Self::UnknownTypeReference {
            reference: reference.into(),
        }
    }

    /// Creates a malformed simple type error.
    pub fn malformed_simple_type(name: impl Into<String>) -> Self {
        Self::MalformedSimpleType { name: name.into() }
    }
}
