//! Intermediate representation for code generation.
//!
//! The IR is language agnostic: it records simple types (aliases and closed
//! sets of literals) and complex types (records with single inheritance).
//! References between types are plain names, resolved through lookup
//! tables built once the IR is complete.

use std::collections::{HashMap, HashSet};

/// Normalized simple type: an alias or a closed set of literal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleTypeDef {
    /// Type name.
    pub name: String,
    /// Underlying primitive or simple type.
    pub base: Option<String>,
    /// Enumerated literals in source order.
    pub enumerations: Option<Vec<String>>,
}

impl SimpleTypeDef {
    /// Creates an alias of `base`.
    #[must_use]
    pub fn alias(name: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: Some(base.into()),
            enumerations: None,
        }
    }

    /// Creates an enumeration over `base`.
    #[must_use]
    pub fn enumeration(
        name: impl Into<String>,
        base: impl Into<String>,
        values: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base: Some(base.into()),
            enumerations: Some(values),
        }
    }
}

/// Normalized complex type: a record, optionally extending another one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexTypeDef {
    /// Type name.
    pub name: String,
    /// Name of the parent complex type.
    pub base: Option<String>,
    /// Fields in source order.
    pub elements: Vec<FieldDef>,
}

impl ComplexTypeDef {
    /// Creates a complex type without base or fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            elements: Vec::new(),
        }
    }

    /// Sets the base type.
    #[must_use]
    pub fn extending(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Adds a field.
    pub fn add_field(&mut self, field: FieldDef) {
        self.elements.push(field);
    }
}

/// A field of a complex type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Referenced type name (primitive, simple or complex), resolved lazily.
    pub type_name: String,
    /// Whether the field may repeat without bound.
    pub is_array: bool,
    /// Whether the field may be absent.
    pub is_optional: bool,
}

impl FieldDef {
    /// Creates a single, required field.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_array: false,
            is_optional: false,
        }
    }
}

/// Intermediate representation of a schema for code generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaIr {
    /// Simple types, sorted by name.
    pub simple_types: Vec<SimpleTypeDef>,
    /// Complex types: element-derived types first, then schema complex types.
    pub complex_types: Vec<ComplexTypeDef>,
}

impl SchemaIr {
    /// Creates an IR from already normalized parts.
    #[must_use]
    pub fn new(simple_types: Vec<SimpleTypeDef>, complex_types: Vec<ComplexTypeDef>) -> Self {
        Self {
            simple_types,
            complex_types,
        }
    }

    /// Builds the name lookup over this IR.
    #[must_use]
    pub fn index(&self) -> TypeIndex<'_> {
        TypeIndex::new(self)
    }

    /// Gets a complex type by name.
    #[must_use]
    pub fn complex_type(&self, name: &str) -> Option<&ComplexTypeDef> {
        self.complex_types.iter().find(|t| t.name == name)
    }

    /// Gets a simple type by name.
    #[must_use]
    pub fn simple_type(&self, name: &str) -> Option<&SimpleTypeDef> {
        self.simple_types.iter().find(|t| t.name == name)
    }

    /// Returns true if no types were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.simple_types.is_empty() && self.complex_types.is_empty()
    }
}

/// Name-keyed lookup over the complex types of a [`SchemaIr`].
///
/// When a name is declared more than once the first declaration wins,
/// matching the order in which the types are rendered.
#[derive(Debug)]
pub struct TypeIndex<'a> {
    complex: HashMap<&'a str, &'a ComplexTypeDef>,
}

impl<'a> TypeIndex<'a> {
    /// Indexes every complex type of `ir`.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        let mut complex = HashMap::with_capacity(ir.complex_types.len());
        for def in &ir.complex_types {
            complex.entry(def.name.as_str()).or_insert(def);
        }
        Self { complex }
    }

    /// Gets a complex type by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a ComplexTypeDef> {
        self.complex.get(name).copied()
    }

    /// Returns true if a complex type with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.complex.contains_key(name)
    }

    /// Returns the ancestors of `name`, nearest first.
    ///
    /// The walk stops at the first base that is not declared, and at the
    /// first name seen twice, so it terminates on cyclic input.
    #[must_use]
    pub fn base_chain(&self, name: &str) -> Vec<&'a str> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        seen.insert(name);

        let mut current = self.get(name);
        while let Some(base) = current.and_then(|def| def.base.as_deref()) {
            if !seen.insert(base) {
                break;
            }
            chain.push(base);
            current = self.get(base);
        }

        chain
    }

    /// Returns true if `name` is `root` or inherits from it.
    #[must_use]
    pub fn is_a(&self, name: &str, root: &str) -> bool {
        name == root || self.base_chain(name).iter().any(|base| *base == root)
    }
}

/// Upper-cases the first character of an identifier.
#[must_use]
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character of an identifier.
#[must_use]
pub fn decapitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
