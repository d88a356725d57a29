//! # wsdl2ts Schema
//!
//! WSDL schema reading and normalization.
//!
//! This crate provides:
//! - A loosely-typed XML document tree built from WSDL text
//! - Normalization of the embedded XSD schema into an intermediate representation
//! - Name-based resolution of inheritance between complex types
//! - IR validation

pub mod document;
pub mod error;
pub mod ir;
pub mod normalizer;
pub mod validation;

pub use document::{XmlNode, parse_document};
pub use error::{ParseError, SchemaError};
pub use ir::{ComplexTypeDef, FieldDef, SchemaIr, SimpleTypeDef, TypeIndex};
pub use normalizer::normalize;
pub use validation::validate_ir;

/// Parses WSDL text and normalizes its schema.
///
/// # Errors
/// Returns `SchemaError` if the XML is malformed or the schema cannot be
/// normalized.
pub fn parse_schema(xml: &str) -> Result<SchemaIr, SchemaError> {
    let root = parse_document(xml)?;
    normalize(&root)
}
