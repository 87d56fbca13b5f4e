//! Validate phase - runs lints on the class list.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{
    AccessorWithoutTypeLint, AsyncResultDiscardedLint, DuplicateFunctionLint,
    ForwardDeclareWithoutTypeLint, IncludeGuardCollisionLint, MissingNativeFunctionLint,
};
use tracing::debug;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the class list using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateFunctionLint),
                Box::new(IncludeGuardCollisionLint),
                Box::new(ForwardDeclareWithoutTypeLint),
                Box::new(AccessorWithoutTypeLint),
                Box::new(MissingNativeFunctionLint),
                Box::new(AsyncResultDiscardedLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// The lints this phase runs, in order.
    pub fn lints(&self) -> impl Iterator<Item = &dyn Lint> {
        self.lints.iter().map(|l| l.as_ref())
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&ctx.manifest, &mut ctx.diagnostics);
            debug!(
                lint = lint.name(),
                found = ctx.diagnostics.len() - before,
                "ran lint"
            );
        }

        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use nanbind_manifest::Manifest;

    use super::*;
    use crate::pipeline::Diagnostic;

    fn parse_manifest(content: &str) -> Manifest {
        Manifest::from_str(content).expect("Failed to parse test manifest")
    }

    #[test]
    fn test_default_lints() {
        let phase = ValidatePhase::new();
        let names: Vec<_> = phase.lints().map(|l| l.name()).collect();
        assert_eq!(
            names,
            vec![
                "duplicate-function",
                "include-guard-collision",
                "forward-declare-without-type",
                "accessor-without-type",
                "missing-native-function",
                "async-result-discarded",
            ]
        );
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error(self.name(), "forced error"));
            }
        }

        let mut ctx = CompilationContext::new(Manifest::default());
        let result = ValidatePhase::empty().with_lint(AlwaysErrorLint).run(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        let manifest = parse_manifest(
            r#"
            [[classes]]
            cppClassName = "Index"
            forwardDeclare = true
            "#,
        );
        let mut ctx = CompilationContext::new(manifest);

        let result = ValidatePhase::new().run(&mut ctx);

        assert!(result.is_ok());
        assert_eq!(ctx.warnings().count(), 1);
        assert!(!ctx.has_errors());
    }
}
