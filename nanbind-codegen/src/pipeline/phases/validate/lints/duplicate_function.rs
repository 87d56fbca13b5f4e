//! Lint for bindings declared twice in one class.

use std::collections::HashSet;

use nanbind_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when accessors or functions of one class share a name.
pub struct DuplicateFunctionLint;

impl Lint for DuplicateFunctionLint {
    fn name(&self) -> &'static str {
        "duplicate-function"
    }

    fn description(&self) -> &'static str {
        "Detect bindings declared more than once in a class"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for class in &manifest.classes {
            let mut seen = HashSet::new();
            let accessors = class.emittable_fields().filter_map(|f| f.accessor_name());
            let functions = class.emittable_functions().filter_map(|f| f.binding_name());

            for name in accessors.chain(functions) {
                if !seen.insert(name) {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!("'{}' is bound more than once", name),
                        )
                        .at(format!("{}.{}", class.cpp_class_name, name)),
                    );
                }
            }
        }
    }
}
