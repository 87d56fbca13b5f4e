//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

pub use check::{CheckReport, LintsReport};
pub use generate::{
    ClassLine, GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};
pub use list::{BindingEntry, ClassEntry, ListReport};
pub use output::{Report, TerminalOutput};
