//! Main code generator.

use crate::error::CodegenError;
use crate::typescript::{DiscriminatorGenerator, InterfaceGenerator, SimpleTypeGenerator};
use chrono::{DateTime, SecondsFormat, Utc};
use wsdl2ts_schema::SchemaIr;

/// Options controlling the generated document.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Timestamp embedded in the banner; `None` keeps output byte-stable.
    pub timestamp: Option<DateTime<Utc>>,
    /// Root type of the optional discriminator union.
    pub discriminator_root: Option<String>,
}

impl GeneratorOptions {
    /// Options without timestamp or discriminator.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            timestamp: None,
            discriminator_root: None,
        }
    }

    /// Sets the banner timestamp.
    #[must_use]
    pub fn timestamp(mut self, timestamp: Option<DateTime<Utc>>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Sets the discriminator root type.
    #[must_use]
    pub fn discriminator_root(mut self, root: impl Into<String>) -> Self {
        self.discriminator_root = Some(root.into());
        self
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::minimal().timestamp(Some(Utc::now()))
    }
}

/// Main code generator that produces a complete TypeScript module.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a new generator with default options.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self::with_options(ir, GeneratorOptions::default())
    }

    /// Creates a new generator with the given options.
    #[must_use]
    pub fn with_options(ir: &'a SchemaIr, options: GeneratorOptions) -> Self {
        Self { ir, options }
    }

    /// Generates the complete TypeScript source.
    ///
    /// The banner comes first, then simple types, a blank line, the
    /// interfaces, and the discriminator section when a root is configured.
    ///
    /// # Errors
    /// Returns `CodegenError` if a type cannot be rendered; nothing is
    /// returned in that case.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();

        output.push_str(&self.generate_banner());
        output.push_str(&SimpleTypeGenerator::new(self.ir).generate()?);
        output.push('\n');
        output.push_str(&InterfaceGenerator::new(self.ir).generate()?);

        if let Some(root) = &self.options.discriminator_root {
            output.push('\n');
            output.push_str(&DiscriminatorGenerator::new(self.ir, root).generate());
        }

        Ok(output)
    }

    /// Generates the do-not-edit banner.
    fn generate_banner(&self) -> String {
        let mut output = String::new();
        output.push_str("/* tslint:disable */\n");
        output.push_str("/* eslint-disable */\n");
        output.push_str("/* This file was generated by wsdl2ts.\n");
        output.push_str("Do not make any changes here as it can be regenerated at any time.");
        if let Some(timestamp) = &self.options.timestamp {
            output.push_str(&format!(
                "\nGenerated at: {}",
                timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
        }
        output.push_str(" */\n\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use wsdl2ts_schema::{ComplexTypeDef, FieldDef, SimpleTypeDef};

    fn sample_ir() -> SchemaIr {
        let mut gadget = ComplexTypeDef::new("Gadget").extending("Widget");
        gadget.add_field(FieldDef::new("label", "string"));
        let mut widget = ComplexTypeDef::new("Widget");
        widget.add_field(FieldDef::new("count", "int"));

        SchemaIr::new(
            vec![SimpleTypeDef::enumeration(
                "Status",
                "string",
                vec!["Active".to_string(), "Inactive".to_string()],
            )],
            vec![gadget, widget],
        )
    }

    #[test]
    fn test_generate_document_layout() {
        let ir = sample_ir();
        let output = Generator::with_options(&ir, GeneratorOptions::minimal())
            .generate()
            .expect("generated");

        let expected = "\
/* tslint:disable */
/* eslint-disable */
/* This file was generated by wsdl2ts.
Do not make any changes here as it can be regenerated at any time. */

export type Status = \"Active\" | \"Inactive\";

export interface Gadget extends Widget {
    label?: string;
}

export interface Widget {
    count?: number;
}
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_generate_is_deterministic_without_timestamp() {
        let ir = sample_ir();
        let first = Generator::with_options(&ir, GeneratorOptions::minimal()).generate();
        let second = Generator::with_options(&ir, GeneratorOptions::minimal()).generate();
        assert_eq!(first.expect("first"), second.expect("second"));
    }

    #[test]
    fn test_banner_timestamp() {
        let ir = SchemaIr::default();
        let at = Utc
            .with_ymd_and_hms(2026, 10, 17, 8, 30, 0)
            .single()
            .expect("valid date");
        let output = Generator::with_options(&ir, GeneratorOptions::minimal().timestamp(Some(at)))
            .generate()
            .expect("generated");

        assert!(output.contains("Generated at: 2026-10-17T08:30:00Z */\n"));
    }

    #[test]
    fn test_default_options_embed_timestamp() {
        let ir = SchemaIr::default();
        let output = Generator::new(&ir).generate().expect("generated");
        assert!(output.contains("Generated at: "));
    }

    #[test]
    fn test_discriminator_section() {
        let ir = sample_ir();
        let options = GeneratorOptions::minimal().discriminator_root("Widget");
        let output = Generator::with_options(&ir, options)
            .generate()
            .expect("generated");

        let interfaces_end = output.find("export type WidgetType").expect("union");
        assert!(output[..interfaces_end].contains("export interface Widget {"));
        assert!(output.contains("export type WidgetType =\n    \"Gadget\" |\n    \"Widget\";\n"));
        assert!(output.contains("export const widgetTypes: WidgetType[] = [\n"));
    }

    #[test]
    fn test_generate_propagates_render_errors() {
        let ir = SchemaIr::new(
            vec![SimpleTypeDef {
                name: "Broken".to_string(),
                base: None,
                enumerations: None,
            }],
            vec![],
        );
        let result = Generator::with_options(&ir, GeneratorOptions::minimal()).generate();
        assert!(matches!(result, Err(CodegenError::UnrenderableType { .. })));
    }
}
