//! Analyze phase - computes shared data from the class list.

use eyre::Result;
use tracing::debug;

use crate::{
    analysis::ComputedData,
    pipeline::{CompilationContext, Phase},
};

/// Phase that builds the type registry and per-class summaries.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let computed = ComputedData::from_classes(&ctx.manifest.classes);
        debug!(
            classes = computed.classes.len(),
            wrapped_types = computed.registry.len(),
            "analyzed classes"
        );
        ctx.computed = Some(computed);
        Ok(())
    }
}
