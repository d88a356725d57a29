//! Complex type (interface) code generation.

use crate::error::CodegenError;
use crate::typescript::mapping::property_type;
use wsdl2ts_schema::ir::capitalize_first;
use wsdl2ts_schema::{ComplexTypeDef, SchemaIr};

/// Generator for complex type interfaces.
pub struct InterfaceGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> InterfaceGenerator<'a> {
    /// Creates a new interface generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates all interfaces in IR order, separated by blank lines.
    ///
    /// # Errors
    /// Returns `UnknownPropertyType` if a field type cannot be mapped.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let interfaces = self
            .ir
            .complex_types
            .iter()
            .map(render_complex_type)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(interfaces.join("\n"))
    }
}

/// Renders one complex type as an exported interface.
///
/// Every property is optional whatever the source cardinality: SOAP payloads
/// tolerate omitted elements. Base types are referenced by name, so the
/// declaration order of parent and child does not matter.
///
/// # Errors
/// Returns `UnknownPropertyType` if a field type cannot be mapped.
pub fn render_complex_type(def: &ComplexTypeDef) -> Result<String, CodegenError> {
    let mut output = String::new();

    output.push_str(&format!("export interface {}", capitalize_first(&def.name)));
    if let Some(base) = &def.base {
        output.push_str(&format!(" extends {}", capitalize_first(base)));
    }
    output.push_str(" {\n");

    for field in &def.elements {
        let ty = property_type(&def.name, field)?;
        output.push_str(&format!("    {}?: {};\n", field.name, ty));
    }

    output.push_str("}\n");
    Ok(output)
}
