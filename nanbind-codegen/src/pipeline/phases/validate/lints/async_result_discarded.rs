//! Lint for async bindings whose native result never reaches the callback.

use nanbind_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when an async function returns a plain value and has no
/// return argument: the Baton has no slot for it, so it is dropped.
pub struct AsyncResultDiscardedLint;

impl Lint for AsyncResultDiscardedLint {
    fn name(&self) -> &'static str {
        "async-result-discarded"
    }

    fn description(&self) -> &'static str {
        "Warn when an async binding drops its native return value"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for class in &manifest.classes {
            let discarding = class
                .emittable_functions()
                .filter(|f| f.is_async && f.returns_value() && f.return_args().next().is_none());

            for function in discarding {
                let name = function.binding_name().unwrap_or_default();
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "async function '{}' discards its native return value",
                            name
                        ),
                    )
                    .at(format!("{}.{}", class.cpp_class_name, name)),
                );
            }
        }
    }
}
