//! Prelude module for convenient imports.
//!
//! ```ignore
//! use wsdl2ts::prelude::*;
//! ```

// Entry point
pub use crate::error::GenerateError;
pub use crate::generate::{generate_types, render_types};
pub use crate::options::{GenerateOptions, SchemaSource};
pub use crate::resources::{LATEST_METADATA_VERSION, MetadataVersion};

// Schema types
pub use wsdl2ts_schema::{ComplexTypeDef, FieldDef, SchemaIr, SimpleTypeDef, TypeIndex};

// Codegen types
pub use wsdl2ts_codegen::{Generator, GeneratorOptions};
