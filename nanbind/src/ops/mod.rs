//! Core operations.
//!
//! This module contains the business logic for nanbind commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::{check, lints};
pub use generate::{GenerateOptions, generate};
pub use list::list;

use nanbind_codegen::pipeline::Diagnostic;

/// `[code] message`, with the location on a continuation line.
fn describe(diagnostic: &Diagnostic) -> String {
    let head = format!("[{}] {}", diagnostic.code, diagnostic.message);
    match &diagnostic.location {
        Some(loc) => format!("{}\n  --> {}", head, loc),
        None => head,
    }
}
