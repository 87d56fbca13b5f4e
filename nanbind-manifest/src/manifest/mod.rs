//! Manifest types and parsing for nanbind.toml files.

mod file;
mod parse;
mod validate;

use std::path::PathBuf;

pub use file::NanbindToml;
use nanbind_ir::{ClassSpec, NativeLibrary};
pub use parse::parse_manifest;
use serde::Deserialize;
pub(crate) use validate::validate_classes;

/// Root manifest for nanbind.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// The wrapped C library
    #[serde(default)]
    pub library: NativeLibrary,

    /// Where generated files go
    #[serde(default)]
    pub output: OutputConfig,

    /// JSON class descriptor files, relative to the manifest
    #[serde(default)]
    pub descriptors: Vec<PathBuf>,

    /// Inline class specs; descriptor classes are appended after these
    #[serde(default)]
    pub classes: Vec<ClassSpec>,
}

impl Manifest {
    /// Find a class by its wrapper name
    pub fn class(&self, name: &str) -> Option<&ClassSpec> {
        self.classes.iter().find(|c| c.cpp_class_name == name)
    }

    /// Check if a class exists
    pub fn has_class(&self, name: &str) -> bool {
        self.class(name).is_some()
    }
}

/// Output directory layout, relative to the output root
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the `.h` declaration files
    pub include_dir: PathBuf,
    /// Directory receiving the `.cc` implementation files
    pub source_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_dir: PathBuf::from("include"),
            source_dir: PathBuf::from("src"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest = Manifest::from_str("").unwrap();

        assert_eq!(manifest.library, NativeLibrary::default());
        assert_eq!(manifest.output, OutputConfig::default());
        assert!(manifest.descriptors.is_empty());
        assert!(manifest.classes.is_empty());
    }

    #[test]
    fn test_classes_keep_declaration_order() {
        let manifest = Manifest::from_str(
            r#"
            [[classes]]
            cppClassName = "Repository"
            cType = "git_repository"

            [[classes]]
            cppClassName = "Oid"
            cType = "git_oid"

            [[classes]]
            cppClassName = "Blob"
            "#,
        )
        .unwrap();

        let names: Vec<_> = manifest
            .classes
            .iter()
            .map(|c| c.cpp_class_name.as_str())
            .collect();
        assert_eq!(names, vec!["Repository", "Oid", "Blob"]);
        assert!(manifest.has_class("Oid"));
        assert!(!manifest.has_class("Tree"));
    }

    #[test]
    fn test_library_and_output_sections() {
        let manifest = Manifest::from_str(
            r#"
            descriptors = ["types/oid.json"]

            [library]
            header = "sqlite3.h"
            error_type = "sqlite3_error"
            ok_code = "SQLITE_OK"

            [output]
            include_dir = "gen/include"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.library.header, "sqlite3.h");
        assert_eq!(manifest.library.ok_code, "SQLITE_OK");
        assert_eq!(manifest.library.last_error, "giterr_last()");
        assert_eq!(manifest.output.include_dir, PathBuf::from("gen/include"));
        assert_eq!(manifest.output.source_dir, PathBuf::from("src"));
        assert_eq!(manifest.descriptors, vec![PathBuf::from("types/oid.json")]);
    }
}
