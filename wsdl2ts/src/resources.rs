//! Built-in and external WSDL resources.
//!
//! Built-in schema versions live under `<resource dir>/wsdl/metadata/<version>.xml`.

use crate::error::GenerateError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use wsdl2ts_schema::{XmlNode, parse_document};

/// Environment variable overriding the default resource directory.
pub const RESOURCE_DIR_ENV: &str = "WSDL2TS_RESOURCE_DIR";

/// Built-in Metadata WSDL versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetadataVersion {
    /// API version 47.0.
    V47,
}

/// The newest built-in Metadata WSDL version.
pub const LATEST_METADATA_VERSION: MetadataVersion = MetadataVersion::V47;

impl MetadataVersion {
    /// All built-in versions, oldest first.
    pub const ALL: &'static [MetadataVersion] = &[MetadataVersion::V47];

    /// Returns the version identifier, e.g. `"47"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V47 => "47",
        }
    }

    /// Returns the WSDL path of this version below `resource_dir`.
    #[must_use]
    pub fn path_in(self, resource_dir: &Path) -> PathBuf {
        resource_dir
            .join("wsdl")
            .join("metadata")
            .join(format!("{}.xml", self.as_str()))
    }
}

impl fmt::Display for MetadataVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetadataVersion {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_end_matches(".0");
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| GenerateError::UnknownVersion {
                version: s.to_string(),
                supported: Self::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Returns the default resource directory.
///
/// `WSDL2TS_RESOURCE_DIR` wins when set; otherwise the `resources`
/// directory of this crate is used.
///
/// The Metadata WSDL files are not distributed with this crate. Place them
/// at `<dir>/wsdl/metadata/<version>.xml` before selecting a built-in
/// version; otherwise loading fails with [`GenerateError::Io`] naming the
/// expected path.
#[must_use]
pub fn default_resource_dir() -> PathBuf {
    std::env::var_os(RESOURCE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("resources"))
}

/// Reads a built-in WSDL version from `resource_dir`.
///
/// # Errors
/// Returns `GenerateError` if the file cannot be read or parsed.
pub fn read_schema_by_version(
    resource_dir: &Path,
    version: MetadataVersion,
) -> Result<XmlNode, GenerateError> {
    tracing::info!("Using built-in Metadata WSDL version {}", version);
    read_schema_from_path(&version.path_in(resource_dir))
}

/// Reads and parses a WSDL file.
///
/// # Errors
/// Returns `GenerateError` if the file cannot be read or parsed.
pub fn read_schema_from_path(path: &Path) -> Result<XmlNode, GenerateError> {
    tracing::debug!("Reading WSDL from {}", path.display());
    let xml = std::fs::read_to_string(path).map_err(|e| GenerateError::io(path, e))?;
    Ok(parse_document(&xml)?)
}
