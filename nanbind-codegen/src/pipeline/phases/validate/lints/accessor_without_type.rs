//! Lint for accessors on classes with no native value to read from.

use nanbind_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on emittable fields of a class without a cType.
pub struct AccessorWithoutTypeLint;

impl Lint for AccessorWithoutTypeLint {
    fn name(&self) -> &'static str {
        "accessor-without-type"
    }

    fn description(&self) -> &'static str {
        "Detect accessors on classes that hold no native value"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for class in manifest.classes.iter().filter(|c| !c.has_native_type()) {
            for accessor in class.emittable_fields().filter_map(|f| f.accessor_name()) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("accessor '{}' needs the class to have a cType", accessor),
                    )
                    .at(format!("{}.{}", class.cpp_class_name, accessor)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{super::lint_toml, *};

    #[test]
    fn test_accessor_on_payloadless_class() {
        let diagnostics = lint_toml(
            &AccessorWithoutTypeLint,
            r#"
            [[classes]]
            cppClassName = "Config"

            [[classes.fields]]
            name = "level"
            cType = "int"
            cppFunctionName = "Level"

            [[classes.fields]]
            name = "hidden"
            cType = "int"
            cppFunctionName = "Hidden"
            ignore = true
            "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("Config.Level"));
    }
}
