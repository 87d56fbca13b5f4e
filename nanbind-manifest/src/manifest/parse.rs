//! Manifest parsing from strings.

use std::str::FromStr;

use super::{Manifest, validate_classes};
use crate::{Error, Result, Source};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "nanbind.toml")
    }
}

impl Manifest {
    /// Parse a nanbind.toml from a string with a custom filename for error reporting.
    ///
    /// Descriptor files are not loaded here; use [`crate::NanbindToml::open`]
    /// to resolve them relative to the manifest.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source = Source::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source.toml(e))?;

    validate_classes(&manifest.classes, &source)?;
    Ok(manifest)
}
