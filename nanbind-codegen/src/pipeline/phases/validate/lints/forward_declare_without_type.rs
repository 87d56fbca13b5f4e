//! Lint for forwardDeclare flags that cannot take effect.

use nanbind_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when a class asks for a forward declaration without a cType.
pub struct ForwardDeclareWithoutTypeLint;

impl Lint for ForwardDeclareWithoutTypeLint {
    fn name(&self) -> &'static str {
        "forward-declare-without-type"
    }

    fn description(&self) -> &'static str {
        "Warn when forwardDeclare is set on a class without a cType"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for class in &manifest.classes {
            if class.forward_declare && !class.has_native_type() {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        "forwardDeclare has no effect without a cType",
                    )
                    .at(class.cpp_class_name.as_str()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{super::lint_toml, *};
    use crate::pipeline::Severity;

    #[test]
    fn test_flag_without_type() {
        let diagnostics = lint_toml(
            &ForwardDeclareWithoutTypeLint,
            r#"
            [[classes]]
            cppClassName = "Index"
            forwardDeclare = true

            [[classes]]
            cppClassName = "Signature"
            cType = "git_signature"
            forwardDeclare = true
            "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert_eq!(diagnostics[0].location.as_deref(), Some("Index"));
    }
}
