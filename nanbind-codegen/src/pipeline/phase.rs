//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A step over the resolved class list.
///
/// Phases run in order and may read and modify the context. Non-fatal
/// problems are recorded as diagnostics; an `Err` stops the pipeline.
pub trait Phase: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
