//! XSD primitive to TypeScript type mapping.

use crate::error::CodegenError;
use wsdl2ts_schema::FieldDef;

/// XSD primitives with a dedicated TypeScript representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XsdPrimitive {
    /// `xsd:int`.
    Int,
    /// `xsd:double`.
    Double,
    /// `xsd:long`.
    Long,
    /// `xsd:boolean`.
    Boolean,
    /// `xsd:string`.
    String,
    /// `xsd:date`.
    Date,
    /// `xsd:dateTime`.
    DateTime,
    /// `xsd:time`.
    Time,
    /// `xsd:base64Binary`.
    Base64Binary,
    /// `xsd:anyType`.
    AnyType,
}

impl XsdPrimitive {
    /// Parses a primitive from its unprefixed XSD name.
    #[must_use]
    pub fn from_xsd_name(name: &str) -> Option<Self> {
        match name {
            "int" => Some(Self::Int),
            "double" => Some(Self::Double),
            "long" => Some(Self::Long),
            "boolean" => Some(Self::Boolean),
            "string" => Some(Self::String),
            "date" => Some(Self::Date),
            "dateTime" => Some(Self::DateTime),
            "time" => Some(Self::Time),
            "base64Binary" => Some(Self::Base64Binary),
            "anyType" => Some(Self::AnyType),
            _ => None,
        }
    }

    /// Returns the XSD name of the primitive.
    #[must_use]
    pub const fn xsd_name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Double => "double",
            Self::Long => "long",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Date => "date",
            Self::DateTime => "dateTime",
            Self::Time => "time",
            Self::Base64Binary => "base64Binary",
            Self::AnyType => "anyType",
        }
    }

    /// Returns the TypeScript type for the primitive.
    #[must_use]
    pub const fn ts_type(self) -> &'static str {
        match self {
            Self::Int | Self::Double | Self::Long | Self::Time => "number",
            Self::Boolean => "boolean",
            Self::String | Self::Date | Self::DateTime => "string",
            Self::Base64Binary | Self::AnyType => "any",
        }
    }
}

/// Maps a type name to TypeScript.
///
/// Names outside the primitive table refer to types declared in the same
/// output and are returned unchanged.
#[must_use]
pub fn map_type(type_name: &str) -> &str {
    XsdPrimitive::from_xsd_name(type_name).map_or(type_name, |primitive| primitive.ts_type())
}

/// Returns the TypeScript property type of a field of `owner`.
///
/// # Errors
/// Returns `UnknownPropertyType` if the field type maps to nothing.
pub fn property_type(owner: &str, field: &FieldDef) -> Result<String, CodegenError> {
    let mapped = map_type(&field.type_name);
    if mapped.is_empty() {
        return Err(CodegenError::unknown_property_type(
            owner,
            &field.name,
            &field.type_name,
        ));
    }

    if field.is_array {
        Ok(format!("{mapped}[]"))
    } else {
        Ok(mapped.to_string())
    }
}

/// Renders a string as a double-quoted TypeScript literal.
#[must_use]
pub fn quote_literal(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_table() {
        let expected = [
            ("int", "number"),
            ("double", "number"),
            ("long", "number"),
            ("boolean", "boolean"),
            ("string", "string"),
            ("date", "string"),
            ("dateTime", "string"),
            ("time", "number"),
            ("base64Binary", "any"),
            ("anyType", "any"),
        ];
        for (xsd, ts) in expected {
            assert_eq!(map_type(xsd), ts, "mapping of {xsd}");
            let prim = XsdPrimitive::from_xsd_name(xsd).expect("known primitive");
            assert_eq!(prim.xsd_name(), xsd);
        }
    }

    #[test]
    fn test_declared_types_pass_through() {
        assert_eq!(map_type("DeployOptions"), "DeployOptions");
        assert_eq!(map_type("decimal"), "decimal");
        assert_eq!(XsdPrimitive::from_xsd_name("String"), None);
    }

    #[test]
    fn test_map_type_borrows_owned_names() {
        let declared = String::from("ApexClass");
        let primitive = String::from("dateTime");
        assert_eq!(map_type(&declared), "ApexClass");
        assert_eq!(map_type(&primitive), "string");
    }

    #[test]
    fn test_property_type_wraps_arrays() {
        let mut field = FieldDef::new("tags", "string");
        assert_eq!(property_type("Widget", &field).expect("mapped"), "string");

        field.is_array = true;
        assert_eq!(property_type("Widget", &field).expect("mapped"), "string[]");

        let nested = FieldDef {
            is_array: true,
            ..FieldDef::new("parts", "Widget")
        };
        assert_eq!(property_type("Widget", &nested).expect("mapped"), "Widget[]");
    }

    #[test]
    fn test_property_type_rejects_empty_type() {
        let field = FieldDef::new("broken", "");
        let result = property_type("Widget", &field);
        assert!(matches!(
            result,
            Err(CodegenError::UnknownPropertyType { ref owner, ref field, .. })
                if owner == "Widget" && field == "broken"
        ));
    }

    #[test]
    fn test_quote_literal() {
        assert_eq!(quote_literal("Active"), "\"Active\"");
        assert_eq!(quote_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote_literal("C:\\"), "\"C:\\\\\"");
    }
}
