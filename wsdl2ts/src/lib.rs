//! # wsdl2ts
//!
//! TypeScript type declarations from SOAP WSDL schemas.
//!
//! The embedded XSD schema is normalized into a small IR of simple types,
//! complex types and fields, validated, and rendered as TypeScript type
//! aliases, string literal unions and interfaces.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wsdl2ts::prelude::*;
//!
//! let options = GenerateOptions::new()
//!     .metadata_wsdl_path("metadata.wsdl")
//!     .output_file("src/metadata-types.ts")
//!     .discriminator_root("Metadata");
//! generate_types(&options)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - XML document tree, normalizer, IR and validation
//! - [`codegen`] - TypeScript rendering
//! - [`resources`] - Built-in WSDL versions
//! - [`options`] - Generation options and source precedence

pub mod error;
pub mod generate;
pub mod options;
pub mod prelude;
pub mod resources;

pub use error::GenerateError;
pub use generate::{build_ir, generate_types, load_schema, render_types};
pub use options::{DEFAULT_OUTPUT_FILE, GenerateOptions, SchemaSource};
pub use resources::{LATEST_METADATA_VERSION, MetadataVersion};

/// Schema parsing, normalization and validation.
pub mod schema {
    pub use wsdl2ts_schema::*;
}

/// TypeScript code generation.
pub mod codegen {
    pub use wsdl2ts_codegen::*;
}
