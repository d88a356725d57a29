//! Discriminator set generation.
//!
//! Emits a closed union of every complex type that is, or inherits from, a
//! designated root type, plus a constant array of the same names for use at
//! runtime.

use crate::typescript::mapping::quote_literal;
use wsdl2ts_schema::ir::{capitalize_first, decapitalize_first};
use wsdl2ts_schema::{ComplexTypeDef, SchemaIr};

/// Generator for the root type discriminator union and name list.
pub struct DiscriminatorGenerator<'a> {
    ir: &'a SchemaIr,
    root: &'a str,
}

impl<'a> DiscriminatorGenerator<'a> {
    /// Creates a discriminator generator for the given root type.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, root: &'a str) -> Self {
        Self { ir, root }
    }

    /// Name of the generated union type, e.g. `MetadataType`.
    #[must_use]
    pub fn union_name(&self) -> String {
        format!("{}Type", capitalize_first(self.root))
    }

    /// Name of the generated constant, e.g. `metadataTypes`.
    #[must_use]
    pub fn const_name(&self) -> String {
        format!("{}Types", decapitalize_first(self.root))
    }

    /// Generates the union type followed by the name list.
    #[must_use]
    pub fn generate(&self) -> String {
        let names: Vec<String> = reachable_from_root(self.ir, self.root)
            .iter()
            .map(|def| quote_literal(&def.name))
            .collect();
        tracing::info!("{} types: {}", self.root, names.len());

        let union_name = self.union_name();
        let mut output = String::new();

        if names.is_empty() {
            output.push_str(&format!("export type {union_name} = never;\n"));
        } else {
            output.push_str(&format!("export type {union_name} =\n"));
            output.push_str(&format!("    {};\n", names.join(" |\n    ")));
        }

        output.push('\n');
        output.push_str(&format!(
            "export const {}: {}[] = [\n",
            self.const_name(),
            union_name
        ));
        for name in &names {
            output.push_str(&format!("    {name},\n"));
        }
        output.push_str("];\n");

        output
    }
}

/// Returns the complex types that are `root` or inherit from it, in IR order.
///
/// Membership follows [`TypeIndex::is_a`], which stops at undeclared bases
/// and at cycles, so types on a cycle that does not pass through `root`
/// never join. An undeclared root yields an empty list.
///
/// [`TypeIndex::is_a`]: wsdl2ts_schema::TypeIndex::is_a
#[must_use]
pub fn reachable_from_root<'a>(ir: &'a SchemaIr, root: &str) -> Vec<&'a ComplexTypeDef> {
    let index = ir.index();
    if !index.contains(root) {
        tracing::warn!("Discriminator root '{}' is not a declared complex type", root);
        return Vec::new();
    }

    ir.complex_types
        .iter()
        .filter(|def| index.is_a(&def.name, root))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata_ir() -> SchemaIr {
        SchemaIr::new(
            vec![],
            vec![
                ComplexTypeDef::new("DeployOptions"),
                ComplexTypeDef::new("ApexClass").extending("MetadataWithContent"),
                ComplexTypeDef::new("Metadata"),
                ComplexTypeDef::new("MatchingRules").extending("Metadata"),
                ComplexTypeDef::new("MetadataWithContent").extending("Metadata"),
                ComplexTypeDef::new("Unrelated").extending("DeployOptions"),
            ],
        )
    }

    fn names<'a>(defs: &[&'a ComplexTypeDef]) -> Vec<&'a str> {
        defs.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_reachable_from_root() {
        let ir = metadata_ir();
        let reachable = reachable_from_root(&ir, "Metadata");

        assert_eq!(
            names(&reachable),
            vec!["ApexClass", "Metadata", "MatchingRules", "MetadataWithContent"]
        );
    }

    #[test]
    fn test_unknown_root_is_empty() {
        let ir = metadata_ir();
        assert!(reachable_from_root(&ir, "Missing").is_empty());
    }

    #[test]
    fn test_cycle_terminates() {
        let ir = SchemaIr::new(
            vec![],
            vec![
                ComplexTypeDef::new("Root"),
                ComplexTypeDef::new("A").extending("B"),
                ComplexTypeDef::new("B").extending("A"),
                ComplexTypeDef::new("C").extending("Root"),
            ],
        );
        let reachable = reachable_from_root(&ir, "Root");
        assert_eq!(names(&reachable), vec!["Root", "C"]);
    }

    #[test]
    fn test_membership_agrees_with_type_index() {
        let ir = metadata_ir();
        let index = ir.index();
        let reachable = names(&reachable_from_root(&ir, "MetadataWithContent"));

        assert_eq!(reachable, vec!["ApexClass", "MetadataWithContent"]);
        for def in &ir.complex_types {
            assert_eq!(
                reachable.contains(&def.name.as_str()),
                index.is_a(&def.name, "MetadataWithContent"),
                "membership of {}",
                def.name
            );
        }
    }

    #[test]
    fn test_generate_union_and_list() {
        let ir = metadata_ir();
        let generator = DiscriminatorGenerator::new(&ir, "Metadata");

        assert_eq!(generator.union_name(), "MetadataType");
        assert_eq!(generator.const_name(), "metadataTypes");

        let output = generator.generate();
        assert!(output.starts_with(
            "export type MetadataType =\n    \"ApexClass\" |\n    \"Metadata\" |\n"
        ));
        assert!(output.contains("    \"MetadataWithContent\";\n"));
        assert!(output.contains("export const metadataTypes: MetadataType[] = [\n"));
        assert!(output.contains("    \"MatchingRules\",\n"));
        assert!(!output.contains("Unrelated"));
        assert!(!output.contains("DeployOptions"));
        assert!(output.ends_with("];\n"));
    }

    #[test]
    fn test_generate_empty() {
        let ir = SchemaIr::default();
        let output = DiscriminatorGenerator::new(&ir, "Metadata").generate();
        assert_eq!(
            output,
            "export type MetadataType = never;\n\nexport const metadataTypes: MetadataType[] = [\n];\n"
        );
    }
}
