//! Generation options and schema source selection.

use crate::resources::{LATEST_METADATA_VERSION, MetadataVersion, default_resource_dir};
use chrono::Utc;
use std::path::{Path, PathBuf};
use wsdl2ts_codegen::GeneratorOptions;

/// Default output file name.
pub const DEFAULT_OUTPUT_FILE: &str = "metadata-types.ts";

/// Where the WSDL document is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaSource<'a> {
    /// A built-in version below the resource directory.
    Version(MetadataVersion),
    /// An explicit file.
    Path(&'a Path),
}

/// Options for an end-to-end generation run.
///
/// Source precedence is `latest`, then `metadata_version`, then
/// `metadata_wsdl_path`; with none of them set the newest built-in version
/// is used.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    output_file: PathBuf,
    latest: bool,
    metadata_version: Option<MetadataVersion>,
    metadata_wsdl_path: Option<PathBuf>,
    resource_dir: Option<PathBuf>,
    discriminator_root: Option<String>,
    timestamp: bool,
}

impl GenerateOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            latest: false,
            metadata_version: None,
            metadata_wsdl_path: None,
            resource_dir: None,
            discriminator_root: None,
            timestamp: true,
        }
    }

    /// Sets the output file.
    #[must_use]
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    /// Forces the newest built-in version.
    #[must_use]
    pub fn latest(mut self, latest: bool) -> Self {
        self.latest = latest;
        self
    }

    /// Selects a built-in version.
    #[must_use]
    pub fn metadata_version(mut self, version: MetadataVersion) -> Self {
        self.metadata_version = Some(version);
        self
    }

    /// Reads the WSDL from an explicit file.
    #[must_use]
    pub fn metadata_wsdl_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.metadata_wsdl_path = Some(path.into());
        self
    }

    /// Overrides the directory holding built-in versions.
    #[must_use]
    pub fn resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = Some(dir.into());
        self
    }

    /// Emits a discriminator union for descendants of `root`.
    #[must_use]
    pub fn discriminator_root(mut self, root: impl Into<String>) -> Self {
        self.discriminator_root = Some(root.into());
        self
    }

    /// Toggles the generation timestamp in the banner.
    #[must_use]
    pub fn timestamp(mut self, enabled: bool) -> Self {
        self.timestamp = enabled;
        self
    }

    /// Returns the output file.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_file
    }

    /// Returns the effective resource directory.
    #[must_use]
    pub fn effective_resource_dir(&self) -> PathBuf {
        self.resource_dir.clone().unwrap_or_else(default_resource_dir)
    }

    /// Resolves the schema source by precedence.
    #[must_use]
    pub fn source(&self) -> SchemaSource<'_> {
        if self.latest {
            return SchemaSource::Version(LATEST_METADATA_VERSION);
        }
        if let Some(version) = self.metadata_version {
            return SchemaSource::Version(version);
        }
        match &self.metadata_wsdl_path {
            Some(path) => SchemaSource::Path(path),
            None => SchemaSource::Version(LATEST_METADATA_VERSION),
        }
    }

    /// Builds the renderer options for this run.
    #[must_use]
    pub fn generator_options(&self) -> GeneratorOptions {
        let mut options =
            GeneratorOptions::minimal().timestamp(self.timestamp.then(Utc::now));
        if let Some(root) = &self.discriminator_root {
            options = options.discriminator_root(root.clone());
        }
        options
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GenerateOptions::default();
        assert_eq!(options.output_path(), Path::new(DEFAULT_OUTPUT_FILE));
        assert_eq!(options.source(), SchemaSource::Version(LATEST_METADATA_VERSION));
        assert!(options.generator_options().timestamp.is_some());
        assert!(options.generator_options().discriminator_root.is_none());
    }

    #[test]
    fn test_latest_wins() {
        let options = GenerateOptions::new()
            .metadata_wsdl_path("custom.wsdl")
            .metadata_version(MetadataVersion::V47)
            .latest(true);
        assert_eq!(options.source(), SchemaSource::Version(LATEST_METADATA_VERSION));
    }

    #[test]
    fn test_version_beats_path() {
        let options = GenerateOptions::new()
            .metadata_wsdl_path("custom.wsdl")
            .metadata_version(MetadataVersion::V47);
        assert_eq!(options.source(), SchemaSource::Version(MetadataVersion::V47));
    }

    #[test]
    fn test_path_source() {
        let options = GenerateOptions::new().metadata_wsdl_path("custom.wsdl");
        assert_eq!(options.source(), SchemaSource::Path(Path::new("custom.wsdl")));
    }

    #[test]
    fn test_resource_dir_override() {
        let options = GenerateOptions::new().resource_dir("/opt/wsdl");
        assert_eq!(options.effective_resource_dir(), PathBuf::from("/opt/wsdl"));
    }

    #[test]
    fn test_generator_options() {
        let options = GenerateOptions::new()
            .timestamp(false)
            .discriminator_root("Metadata")
            .generator_options();
        assert!(options.timestamp.is_none());
        assert_eq!(options.discriminator_root.as_deref(), Some("Metadata"));
    }
}
