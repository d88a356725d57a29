//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema normalization or validation error.
    #[error("schema error: {0}")]
    Schema(#[from] wsdl2ts_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A field type could not be mapped to a TypeScript type.
    #[error("unknown property type '{type_name}' for field '{field}' of '{owner}'")]
    UnknownPropertyType {
        /// Owning complex type.
        owner: String,
        /// Field name.
        field: String,
        /// Unmapped type name.
        type_name: String,
    },

    /// A simple type has neither enumerations nor a base.
    #[error("cannot render simple type '{name}' without enumerations or base")]
    UnrenderableType {
        /// Simple type name.
        name: String,
    },
}

impl CodegenError {
    /// Creates an unknown property type error.
    pub fn unknown_property_type(
        owner: impl Into<String>,
        field: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::UnknownPropertyType {
            owner: owner.into(),
            field: field.into(),
            type_name: type_name.into(),
        }
    }

    /// Creates an unrenderable type error.
    pub fn unrenderable(name: impl Into<String>) -> Self {
        Self::UnrenderableType { name: name.into() }
    }
}
