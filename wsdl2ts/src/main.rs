//! Command line entry point.
//!
//! Run with: `cargo run -p wsdl2ts -- --wsdl metadata.wsdl --root-type Metadata`

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wsdl2ts::{DEFAULT_OUTPUT_FILE, GenerateOptions, MetadataVersion};

/// Generate TypeScript type declarations from a SOAP WSDL schema.
#[derive(Debug, Parser)]
#[command(name = "wsdl2ts", version, about)]
struct Cli {
    /// Output TypeScript file.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Use the newest built-in WSDL, ignoring other sources.
    ///
    /// Built-in WSDLs are not shipped: the file must exist at
    /// <resource dir>/wsdl/metadata/<version>.xml. Without --wsdl this is
    /// also the default source.
    #[arg(long)]
    latest: bool,

    /// Built-in WSDL version to use, read from
    /// <resource dir>/wsdl/metadata/<version>.xml (not shipped; see --resource-dir).
    #[arg(long, value_name = "VERSION")]
    metadata_version: Option<MetadataVersion>,

    /// WSDL file to read.
    #[arg(long = "wsdl", value_name = "PATH")]
    metadata_wsdl_path: Option<PathBuf>,

    /// Directory holding built-in WSDL versions [default: $WSDL2TS_RESOURCE_DIR, else the
    /// crate's resources directory].
    #[arg(long, value_name = "DIR")]
    resource_dir: Option<PathBuf>,

    /// Emit a discriminator union of all types extending this root type.
    #[arg(long, value_name = "TYPE")]
    root_type: Option<String>,

    /// Omit the generation timestamp from the banner.
    #[arg(long)]
    no_timestamp: bool,
}

impl Cli {
    fn into_options(self) -> GenerateOptions {
        let mut options = GenerateOptions::new()
            .output_file(self.output)
            .latest(self.latest)
            .timestamp(!self.no_timestamp);
        if let Some(version) = self.metadata_version {
            options = options.metadata_version(version);
        }
        if let Some(path) = self.metadata_wsdl_path {
            options = options.metadata_wsdl_path(path);
        }
        if let Some(dir) = self.resource_dir {
            options = options.resource_dir(dir);
        }
        if let Some(root) = self.root_type {
            options = options.discriminator_root(root);
        }
        options
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = Cli::parse().into_options();
    let path = wsdl2ts::generate_types(&options).context("failed to generate TypeScript types")?;
    tracing::info!("Types generated at {}", path.display());
    Ok(())
}
