//! Lint for classes that would share an include guard or an output file.

use std::collections::HashMap;

use nanbind_core::include_guard;
use nanbind_manifest::Manifest;

use super::super::Lint;
use crate::{naming::file_stem, pipeline::Diagnostic};

/// Lint that errors when two classes map to the same guard or file name.
pub struct IncludeGuardCollisionLint;

impl Lint for IncludeGuardCollisionLint {
    fn name(&self) -> &'static str {
        "include-guard-collision"
    }

    fn description(&self) -> &'static str {
        "Detect classes sharing an include guard or output file"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let mut guards: HashMap<String, &str> = HashMap::new();
        let mut stems: HashMap<String, &str> = HashMap::new();

        for class in &manifest.classes {
            let name = class.cpp_class_name.as_str();

            let guard = include_guard(name);
            if let Some(first) = guards.get(&guard) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "include guard {} of '{}' collides with '{}'",
                            guard, name, first
                        ),
                    )
                    .at(name),
                );
            } else {
                guards.insert(guard, name);
            }

            let stem = file_stem(class);
            if let Some(first) = stems.get(&stem) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "'{}' and '{}' would both be written to {}.h",
                            first, name, stem
                        ),
                    )
                    .at(name),
                );
            } else {
                stems.insert(stem, name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{super::lint_toml, *};

    #[test]
    fn test_case_only_difference_collides() {
        let diagnostics = lint_toml(
            &IncludeGuardCollisionLint,
            r#"
            [[classes]]
            cppClassName = "OdbObject"
            filename = "odb_object"

            [[classes]]
            cppClassName = "ODBObject"
            filename = "odb"
            "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("ODBOBJECT_H"));
    }

    #[test]
    fn test_shared_filename_collides() {
        let diagnostics = lint_toml(
            &IncludeGuardCollisionLint,
            r#"
            [[classes]]
            cppClassName = "Tree"
            filename = "objects"

            [[classes]]
            cppClassName = "Blob"
            filename = "objects"
            "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("objects.h"));
    }

    #[test]
    fn test_distinct_classes() {
        let diagnostics = lint_toml(
            &IncludeGuardCollisionLint,
            r#"
            [[classes]]
            cppClassName = "Tree"

            [[classes]]
            cppClassName = "TreeEntry"
            "#,
        );

        assert!(diagnostics.is_empty());
    }
}
