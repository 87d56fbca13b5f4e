//! Pipeline orchestrator.

use eyre::Result;
use nanbind_manifest::Manifest;
use tracing::debug;

use super::{
    CompilationContext, Phase,
    phases::{AnalyzePhase, ValidatePhase},
};

/// Runs the built-in phases (validate, analyze) followed by any added phases.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new().phase(MyPhase).run(manifest)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with the default lints.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
        }
    }

    /// Replace the validate phase (e.g. to run a custom lint set).
    pub fn validate_with(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails. Validation errors are also left in
    /// the context's diagnostics, so use [`Pipeline::check`] to inspect them.
    pub fn run(&self, manifest: Manifest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest);
        self.run_phases(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline, keeping the context even when a phase fails.
    pub fn check(&self, manifest: Manifest) -> (CompilationContext, Result<()>) {
        let mut ctx = CompilationContext::new(manifest);
        let result = self.run_phases(&mut ctx);
        (ctx, result)
    }

    fn run_phases(&self, ctx: &mut CompilationContext) -> Result<()> {
        let builtin: [&dyn Phase; 2] = [&self.validate, &AnalyzePhase];
        for phase in builtin {
            run_phase(phase, ctx)?;
        }
        for phase in &self.phases {
            run_phase(phase.as_ref(), ctx)?;
        }
        Ok(())
    }
}

fn run_phase(phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
    debug!(phase = phase.name(), "running phase");
    phase.run(ctx)
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
