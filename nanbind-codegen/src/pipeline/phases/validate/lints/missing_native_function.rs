//! Lint for bindings with nothing to call.

use nanbind_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on emittable functions without a cFunctionName.
pub struct MissingNativeFunctionLint;

impl Lint for MissingNativeFunctionLint {
    fn name(&self) -> &'static str {
        "missing-native-function"
    }

    fn description(&self) -> &'static str {
        "Detect bindings without a native function to call"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for class in &manifest.classes {
            for function in class.emittable_functions() {
                let has_native = function
                    .c_function_name
                    .as_deref()
                    .is_some_and(|n| !n.trim().is_empty());
                if has_native {
                    continue;
                }

                let name = function.binding_name().unwrap_or_default();
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("function '{}' has no cFunctionName", name),
                    )
                    .at(format!("{}.{}", class.cpp_class_name, name)),
                );
            }
        }
    }
}
