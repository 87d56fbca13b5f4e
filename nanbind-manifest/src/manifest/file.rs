use std::path::{Path, PathBuf};

use tracing::debug;

use super::Manifest;
use crate::{Result, load_descriptor};

/// Represents a nanbind.toml file with both raw content and the fully
/// resolved manifest (inline classes followed by descriptor classes).
pub struct NanbindToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl NanbindToml {
    /// Open and parse a nanbind.toml file, loading its descriptor files.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let mut manifest = Manifest::from_str_with_filename(&content, &filename)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for descriptor in &manifest.descriptors {
            let classes = load_descriptor(base.join(descriptor))?;
            manifest.classes.extend(classes);
        }

        debug!(
            path = %path.display(),
            classes = manifest.classes.len(),
            "opened manifest"
        );

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the resolved manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
