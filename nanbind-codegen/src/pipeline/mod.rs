//! Validation and analysis pipeline run before rendering.
//!
//! A [`Pipeline`] runs phases over a [`CompilationContext`]:
//!
//! - `ValidatePhase` runs lints and fails on any error diagnostic
//! - `AnalyzePhase` computes the type registry and per-class summaries
//!
//! # Example
//!
//! ```ignore
//! use nanbind_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(manifest)?;
//! for warning in ctx.warnings() {
//!     eprintln!("{}", warning);
//! }
//! let generator = Generator::from_context(&ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
