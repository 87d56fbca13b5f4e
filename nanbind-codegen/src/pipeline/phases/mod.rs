//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints and fails on error diagnostics
//! - [`AnalyzePhase`] - computes shared data from the class list

mod analyze;
mod validate;

pub use analyze::AnalyzePhase;
pub use validate::{
    AccessorWithoutTypeLint, AsyncResultDiscardedLint, DuplicateFunctionLint,
    ForwardDeclareWithoutTypeLint, IncludeGuardCollisionLint, Lint,
    MissingNativeFunctionLint, ValidatePhase,
};
