//! WSDL schema normalizer.
//!
//! Walks the `definitions > types > schema` section of a parsed WSDL
//! document and produces the [`SchemaIr`]. Three schema shapes produce
//! types: simple type restrictions, named complex types and top-level
//! elements declaring an inline complex type.

use crate::document::XmlNode;
use crate::error::SchemaError;
use crate::ir::{ComplexTypeDef, FieldDef, SchemaIr, SimpleTypeDef};

/// Namespace prefixes that may qualify a type reference.
pub const KNOWN_PREFIXES: &[&str] = &["xsd", "tns"];

/// Upper bound marking a repeating field.
const UNBOUNDED: &str = "unbounded";

/// Normalizes a parsed WSDL document into the intermediate representation.
///
/// Complex types derived from top-level elements come first, followed by
/// the schema's named complex types. Each group is sorted on its own; the
/// two groups are not merged into a single order.
///
/// # Arguments
/// * `root` - Root element of the WSDL document (`definitions`)
///
/// # Errors
/// Returns `SchemaError` if the schema section cannot be found, a simple
/// type is malformed, or a type reference has an unknown prefix.
pub fn normalize(root: &XmlNode) -> Result<SchemaIr, SchemaError> {
    if root.local_name() != "definitions" {
        return Err(SchemaError::missing_node("definitions"));
    }
    let schema = root
        .descend(&["types", "schema"])
        .ok_or_else(|| SchemaError::missing_node("definitions/types/schema"))?;

    let complex_nodes: Vec<&XmlNode> = schema.children_named("complexType").collect();
    let simple_nodes: Vec<&XmlNode> = schema.children_named("simpleType").collect();
    let element_nodes: Vec<&XmlNode> = schema.children_named("element").collect();
    tracing::info!("XSD complex types: {}", complex_nodes.len());
    tracing::info!("XSD simple types: {}", simple_nodes.len());
    tracing::info!("XSD elements: {}", element_nodes.len());

    let mut complex_types = normalize_top_level_elements(element_nodes)?;
    let simple_types = normalize_simple_types(simple_nodes)?;
    complex_types.extend(normalize_complex_types(complex_nodes)?);

    tracing::info!("Complex types: {}", complex_types.len());
    tracing::info!("Simple types: {}", simple_types.len());

    Ok(SchemaIr::new(simple_types, complex_types))
}

/// Normalizes `simpleType` nodes, sorted by name.
///
/// # Errors
/// Returns `MalformedSimpleType` for a restriction with neither enumeration
/// nor base, and `UnknownTypeReference` for an unrecognized base prefix.
pub fn normalize_simple_types<'a>(
    nodes: impl IntoIterator<Item = &'a XmlNode>,
) -> Result<Vec<SimpleTypeDef>, SchemaError> {
    let mut simple_types = Vec::new();
    for node in nodes {
        simple_types.push(normalize_simple_type(node)?);
    }
    simple_types.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(simple_types)
}

/// Normalizes a single `simpleType` node.
fn normalize_simple_type(node: &XmlNode) -> Result<SimpleTypeDef, SchemaError> {
    let name = node
        .attr("name")
        .ok_or_else(|| SchemaError::malformed_simple_type("<unnamed>"))?;
    let restriction = node
        .first_child("restriction")
        .ok_or_else(|| SchemaError::malformed_simple_type(name))?;
    let base = restriction
        .attr("base")
        .map(strip_type_prefix)
        .transpose()?
        .map(str::to_string);

    let mut enumerations = restriction.children_named("enumeration").peekable();
    if enumerations.peek().is_some() {
        let values = enumerations
            .filter_map(|e| e.attr("value"))
            .map(str::to_string)
            .collect();
        return Ok(SimpleTypeDef {
            name: name.to_string(),
            base,
            enumerations: Some(values),
        });
    }

    // Length and pattern facets have no counterpart in the IR.
    match base {
        Some(base) => Ok(SimpleTypeDef::alias(name, base)),
        None => Err(SchemaError::malformed_simple_type(name)),
    }
}

/// Normalizes named `complexType` nodes, sorted by name.
///
/// Unnamed nodes, wildcard-only bodies and nodes with neither a sequence nor
/// a complex-content extension are skipped.
///
/// # Errors
/// Returns `UnknownTypeReference` for an unrecognized base or field prefix.
pub fn normalize_complex_types<'a>(
    nodes: impl IntoIterator<Item = &'a XmlNode>,
) -> Result<Vec<ComplexTypeDef>, SchemaError> {
    let mut complex_types = Vec::new();

    for node in nodes {
        let Some(name) = node.attr("name") else {
            tracing::debug!("Skipping complex type without a name");
            continue;
        };

        if let Some(sequence) = node.first_child("sequence") {
            if is_wildcard_only(sequence) {
                tracing::debug!("Skipping complex type '{}' with wildcard-only content", name);
                continue;
            }
            complex_types.push(ComplexTypeDef {
                name: name.to_string(),
                base: None,
                elements: normalize_fields(sequence.children_named("element"))?,
            });
        } else if let Some(extension) = node
            .first_child("complexContent")
            .and_then(|content| content.first_child("extension"))
        {
            let Some(base) = extension.attr("base") else {
                tracing::warn!("Skipping complex type '{}': extension without a base", name);
                continue;
            };
            let elements = match extension.first_child("sequence") {
                Some(sequence) => normalize_fields(sequence.children_named("element"))?,
                None => Vec::new(),
            };
            complex_types.push(ComplexTypeDef {
                name: name.to_string(),
                base: Some(strip_type_prefix(base)?.to_string()),
                elements,
            });
        } else {
            tracing::debug!("Skipping complex type '{}' without extractable content", name);
        }
    }

    complex_types.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(complex_types)
}

/// Normalizes top-level `element` nodes that declare an inline complex type.
///
/// Elements that reference a named type are ignored. Source order is kept.
///
/// # Errors
/// Returns `UnknownTypeReference` for an unrecognized field prefix.
pub fn normalize_top_level_elements<'a>(
    nodes: impl IntoIterator<Item = &'a XmlNode>,
) -> Result<Vec<ComplexTypeDef>, SchemaError> {
    let mut complex_types = Vec::new();

    for node in nodes {
        let Some(sequence) = node
            .first_child("complexType")
            .and_then(|inline| inline.first_child("sequence"))
        else {
            continue;
        };
        let Some(name) = node.attr("name") else {
            tracing::debug!("Skipping inline complex type of an unnamed element");
            continue;
        };
        complex_types.push(ComplexTypeDef {
            name: name.to_string(),
            base: None,
            elements: normalize_fields(sequence.children_named("element"))?,
        });
    }

    Ok(complex_types)
}

/// Normalizes the `element` nodes of a sequence into fields, in order.
///
/// Nodes without a `type` attribute (inline types, element references) are
/// skipped with a warning.
///
/// # Errors
/// Returns `UnknownTypeReference` for an unrecognized type prefix.
pub fn normalize_fields<'a>(
    nodes: impl IntoIterator<Item = &'a XmlNode>,
) -> Result<Vec<FieldDef>, SchemaError> {
    let mut fields = Vec::new();

    for node in nodes {
        let name = node.attr("name");
        let (Some(name), Some(type_ref)) = (name, node.attr("type")) else {
            tracing::warn!(
                "Sequence element without type: {}",
                name.or_else(|| node.attr("ref")).unwrap_or("<unnamed>")
            );
            continue;
        };

        fields.push(FieldDef {
            name: name.to_string(),
            type_name: strip_type_prefix(type_ref)?.to_string(),
            is_array: node.attr("maxOccurs") == Some(UNBOUNDED),
            is_optional: node.attr("minOccurs") == Some("0"),
        });
    }

    Ok(fields)
}

/// Strips a known namespace prefix from a type reference.
///
/// # Errors
/// Returns `UnknownTypeReference` if the reference is unqualified or its
/// prefix is not one of [`KNOWN_PREFIXES`].
pub fn strip_type_prefix(reference: &str) -> Result<&str, SchemaError> {
    match reference.split_once(':') {
        Some((prefix, local)) if KNOWN_PREFIXES.contains(&prefix) && !local.is_empty() => {
            Ok(local)
        }
        _ => Err(SchemaError::unknown_reference(reference)),
    }
}

/// Returns true if a sequence holds wildcards but no element declarations.
fn is_wildcard_only(sequence: &XmlNode) -> bool {
    sequence.children_named("element").next().is_none()
        && sequence.children_named("any").next().is_some()
}
