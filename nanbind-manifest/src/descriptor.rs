//! JSON class descriptor files.
//!
//! A descriptor holds either a single class object or an array of them, in
//! the camelCase shape of [`ClassSpec`].

use std::path::Path;

use nanbind_ir::ClassSpec;
use tracing::debug;

use crate::{Error, Result, Source, manifest::validate_classes};

/// Parse and validate descriptor content, using `filename` for error reporting.
pub fn parse_descriptor(content: &str, filename: &str) -> Result<Vec<ClassSpec>> {
    let source = Source::new(content, filename);

    let classes = if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<ClassSpec>>(content)
    } else {
        serde_json::from_str::<ClassSpec>(content).map(|class| vec![class])
    }
    .map_err(|e| source.json(e))?;

    validate_classes(&classes, &source)?;
    Ok(classes)
}

/// Read, parse and validate a descriptor file.
pub fn load_descriptor(path: impl AsRef<Path>) -> Result<Vec<ClassSpec>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;

    let classes = parse_descriptor(&content, &path.display().to_string())?;
    debug!(path = %path.display(), classes = classes.len(), "loaded descriptor");
    Ok(classes)
}
