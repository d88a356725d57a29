//! # wsdl2ts Codegen
//!
//! TypeScript code generation from normalized WSDL schemas.
//!
//! This crate provides:
//! - Type aliases and string literal unions for simple types
//! - Interfaces with single inheritance for complex types
//! - An optional discriminator union over a root type's descendants
//! - Full document assembly with a do-not-edit banner

pub mod error;
pub mod generator;
pub mod typescript;

pub use error::CodegenError;
pub use generator::{Generator, GeneratorOptions};

/// Generates TypeScript from WSDL text.
///
/// # Arguments
/// * `xml` - WSDL document content
/// * `options` - Banner and discriminator options
///
/// # Returns
/// Generated TypeScript code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
pub fn generate_from_xml(xml: &str, options: GeneratorOptions) -> Result<String, CodegenError> {
    let ir = wsdl2ts_schema::parse_schema(xml)?;
    wsdl2ts_schema::validate_ir(&ir)?;
    let generator = Generator::with_options(&ir, options);
    generator.generate()
}

/// Generates TypeScript from a WSDL file.
///
/// # Arguments
/// * `path` - Path to the WSDL file
/// * `options` - Banner and discriminator options
///
/// # Returns
/// Generated TypeScript code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    options: GeneratorOptions,
) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml, options)
}
