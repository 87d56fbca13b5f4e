//! Lint trait for class spec validation.

use nanbind_manifest::Manifest;

use crate::pipeline::Diagnostic;

/// A check over the resolved class list.
///
/// Lints never fail; they report through `diagnostics`, using their
/// [`name`](Lint::name) as the diagnostic code.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    /// One line shown by `nanbind check --lints`.
    fn description(&self) -> &'static str;

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>);
}
