//! End-to-end generation: load, normalize, validate, render, write.

use crate::error::GenerateError;
use crate::options::{GenerateOptions, SchemaSource};
use crate::resources::{read_schema_by_version, read_schema_from_path};
use std::io::Write;
use std::path::{Path, PathBuf};
use wsdl2ts_codegen::Generator;
use wsdl2ts_schema::{SchemaIr, XmlNode, normalize, validate_ir};

/// Loads the WSDL document selected by `options`.
///
/// # Errors
/// Returns `GenerateError` if the document cannot be read or parsed.
pub fn load_schema(options: &GenerateOptions) -> Result<XmlNode, GenerateError> {
    match options.source() {
        SchemaSource::Version(version) => {
            read_schema_by_version(&options.effective_resource_dir(), version)
        }
        SchemaSource::Path(path) => {
            tracing::info!("Using WSDL file {}", path.display());
            read_schema_from_path(path)
        }
    }
}

/// Loads and normalizes the selected WSDL into a validated IR.
///
/// # Errors
/// Returns `GenerateError` on load, normalization, or validation failure.
pub fn build_ir(options: &GenerateOptions) -> Result<SchemaIr, GenerateError> {
    let root = load_schema(options)?;
    let ir = normalize(&root)?;
    validate_ir(&ir)?;
    Ok(ir)
}

/// Renders the TypeScript document without writing it.
///
/// # Errors
/// Returns `GenerateError` if any stage fails.
pub fn render_types(options: &GenerateOptions) -> Result<String, GenerateError> {
    let ir = build_ir(options)?;
    let text = Generator::with_options(&ir, options.generator_options()).generate()?;
    Ok(text)
}

/// Generates TypeScript types and writes them to the configured output file.
///
/// The file is replaced only after the whole document has been rendered.
///
/// # Returns
/// The path written.
///
/// # Errors
/// Returns `GenerateError` if any stage fails; the output file is left
/// untouched in that case.
pub fn generate_types(options: &GenerateOptions) -> Result<PathBuf, GenerateError> {
    let text = render_types(options)?;
    let path = options.output_path().to_path_buf();
    write_atomically(&path, &text)?;
    tracing::info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(path)
}

fn write_atomically(path: &Path, contents: &str) -> Result<(), GenerateError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| GenerateError::io(dir, e))?;

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| GenerateError::io(dir, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| GenerateError::io(file.path(), e))?;
    file.persist(path)
        .map_err(|e| GenerateError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WSDL: &str = r#"<definitions xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:tns="urn:test">
    <types>
        <xsd:schema>
            <xsd:complexType name="Widget">
                <xsd:sequence>
                    <xsd:element name="tags" type="xsd:string" maxOccurs="unbounded"/>
                </xsd:sequence>
            </xsd:complexType>
        </xsd:schema>
    </types>
</definitions>"#;

    #[test]
    fn test_write_atomically_creates_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("out.ts");

        write_atomically(&path, "export {};\n").expect("written");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "export {};\n");
    }

    #[test]
    fn test_write_atomically_replaces_existing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.ts");
        std::fs::write(&path, "old").expect("seed");

        write_atomically(&path, "new").expect("written");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "new");
        assert_eq!(std::fs::read_dir(dir.path()).expect("list").count(), 1);
    }

    #[test]
    fn test_render_types_from_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let wsdl = dir.path().join("service.wsdl");
        std::fs::write(&wsdl, WSDL).expect("write");

        let options = GenerateOptions::new()
            .metadata_wsdl_path(&wsdl)
            .timestamp(false);
        let text = render_types(&options).expect("rendered");
        assert!(text.contains("export interface Widget {\n    tags?: string[];\n}\n"));
    }

    #[test]
    fn test_build_ir_missing_version_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let options = GenerateOptions::new().resource_dir(dir.path());
        match build_ir(&options) {
            Err(GenerateError::Io { path, .. }) => {
                assert_eq!(path, dir.path().join("wsdl").join("metadata").join("47.xml"));
            }
            other => panic!("expected a missing file error, got {other:?}"),
        }
    }
}
