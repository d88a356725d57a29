//! IR validation utilities.
//!
//! Checks the invariants the renderer relies on once normalization is
//! complete: every inheritance base names a declared complex type and no
//! inheritance chain loops back on itself.

use crate::error::SchemaError;
use crate::ir::{SchemaIr, TypeIndex};
use std::collections::HashSet;

/// Validates a normalized schema.
///
/// Duplicate type names are reported as warnings only; lookups resolve to
/// the first declaration.
///
/// # Errors
/// Returns `UnresolvedBase` if a complex type extends an undeclared type,
/// or `CircularReference` if an inheritance chain is cyclic.
pub fn validate_ir(ir: &SchemaIr) -> Result<(), SchemaError> {
    warn_duplicates(ir);

    let index = ir.index();
    validate_bases(ir, &index)?;
    validate_acyclic(ir, &index)?;
    Ok(())
}

/// Logs every type name declared more than once.
fn warn_duplicates(ir: &SchemaIr) {
    let mut seen_simple = HashSet::new();
    for def in &ir.simple_types {
        if !seen_simple.insert(def.name.as_str()) {
            tracing::warn!("Duplicate simple type '{}'", def.name);
        }
    }

    let mut seen_complex = HashSet::new();
    for def in &ir.complex_types {
        if !seen_complex.insert(def.name.as_str()) {
            tracing::warn!("Duplicate complex type '{}'", def.name);
        }
        if ir.simple_type(&def.name).is_some() {
            tracing::warn!("Type '{}' is declared as both simple and complex", def.name);
        }
    }
}

/// Checks that each base names a declared complex type.
fn validate_bases(ir: &SchemaIr, index: &TypeIndex<'_>) -> Result<(), SchemaError> {
    for def in &ir.complex_types {
        let Some(base) = &def.base else {
            continue;
        };
        if !index.contains(base) {
            return Err(SchemaError::UnresolvedBase {
                name: def.name.clone(),
                base: base.clone(),
            });
        }
    }
    Ok(())
}

/// Checks that no inheritance chain revisits a type.
fn validate_acyclic(ir: &SchemaIr, index: &TypeIndex<'_>) -> Result<(), SchemaError> {
    for def in &ir.complex_types {
        let mut path = vec![def.name.as_str()];
        let mut current = def.base.as_deref();

        while let Some(base) = current {
            let looped = path.contains(&base);
            path.push(base);
            if looped {
                return Err(SchemaError::CircularReference {
                    path: path.join(" -> "),
                });
            }
            current = index.get(base).and_then(|parent| parent.base.as_deref());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ComplexTypeDef, SimpleTypeDef};

    #[test]
    fn test_validate_valid_ir() {
        let ir = SchemaIr::new(
            vec![SimpleTypeDef::alias("ID", "string")],
            vec![
                ComplexTypeDef::new("Gadget").extending("Widget"),
                ComplexTypeDef::new("Widget"),
            ],
        );
        assert!(validate_ir(&ir).is_ok());
    }

    #[test]
    fn test_validate_unresolved_base() {
        let ir = SchemaIr::new(vec![], vec![ComplexTypeDef::new("Gadget").extending("Widget")]);

        let result = validate_ir(&ir);
        assert!(matches!(
            result,
            Err(SchemaError::UnresolvedBase { ref name, ref base })
                if name == "Gadget" && base == "Widget"
        ));
    }

    #[test]
    fn test_validate_base_must_be_complex() {
        let ir = SchemaIr::new(
            vec![SimpleTypeDef::alias("Widget", "string")],
            vec![ComplexTypeDef::new("Gadget").extending("Widget")],
        );
        assert!(validate_ir(&ir).is_err());
    }

    #[test]
    fn test_validate_circular_inheritance() {
        let ir = SchemaIr::new(
            vec![],
            vec![
                ComplexTypeDef::new("A").extending("B"),
                ComplexTypeDef::new("B").extending("C"),
                ComplexTypeDef::new("C").extending("A"),
            ],
        );

        match validate_ir(&ir) {
            Err(SchemaError::CircularReference { path }) => {
                assert_eq!(path, "A -> B -> C -> A");
            }
            other => panic!("expected circular reference, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_self_inheritance() {
        let ir = SchemaIr::new(vec![], vec![ComplexTypeDef::new("Loop").extending("Loop")]);
        assert!(matches!(
            validate_ir(&ir),
            Err(SchemaError::CircularReference { .. })
        ));
    }

    #[test]
    fn test_validate_duplicates_are_not_fatal() {
        let ir = SchemaIr::new(
            vec![],
            vec![ComplexTypeDef::new("Dup"), ComplexTypeDef::new("Dup")],
        );
        assert!(validate_ir(&ir).is_ok());
    }

    #[test]
    fn test_validate_simple_and_complex_name_clash_is_not_fatal() {
        let ir = SchemaIr::new(
            vec![SimpleTypeDef::alias("Shared", "string")],
            vec![ComplexTypeDef::new("Shared")],
        );
        assert!(validate_ir(&ir).is_ok());
    }
}
