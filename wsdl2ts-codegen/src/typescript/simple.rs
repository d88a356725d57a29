//! Simple type code generation.

use crate::error::CodegenError;
use crate::typescript::mapping::{map_type, quote_literal};
use wsdl2ts_schema::{SchemaIr, SimpleTypeDef};

/// Generator for simple type aliases and literal unions.
pub struct SimpleTypeGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> SimpleTypeGenerator<'a> {
    /// Creates a new simple type generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates all simple types in IR order.
    ///
    /// # Errors
    /// Returns `UnrenderableType` if a type has neither enumerations nor base.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();
        for def in &self.ir.simple_types {
            output.push_str(&render_simple_type(def)?);
        }
        Ok(output)
    }
}

/// Renders one simple type declaration.
///
/// Enumerations become a union of string literals in IR order; otherwise the
/// type aliases its mapped base.
///
/// # Errors
/// Returns `UnrenderableType` if the type has neither enumerations nor base.
pub fn render_simple_type(def: &SimpleTypeDef) -> Result<String, CodegenError> {
    if let Some(values) = &def.enumerations {
        let union = if values.is_empty() {
            "never".to_string()
        } else {
            values
                .iter()
                .map(|v| quote_literal(v))
                .collect::<Vec<_>>()
                .join(" | ")
        };
        return Ok(format!("export type {} = {};\n", def.name, union));
    }

    match &def.base {
        Some(base) => Ok(format!("export type {} = {};\n", def.name, map_type(base))),
        None => Err(CodegenError::unrenderable(&def.name)),
    }
}
