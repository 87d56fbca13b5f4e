//! Render engine for the nanbind binding generator.
//!
//! Turns class specs into NAN wrapper sources: a declaration surface (`.h`)
//! and an implementation surface (`.cc`) per class, both rendered as pure
//! functions of the [`ClassSpec`](nanbind_ir::ClassSpec).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`render`] - The two surfaces and the async scaffold
//! - [`pipeline`] - Lints and analysis run before rendering
//! - [`Generator`] - File set production with preview and write

mod analysis;
pub mod builder;
mod error;
mod generator;
pub mod naming;
pub mod pipeline;
pub mod render;

pub use analysis::{ClassSummary, ComputedData};
pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use error::{RenderError, RenderResult};
pub use generator::{GenerateResult, Generator, PreviewFile};
pub use render::{
    BatonStruct, ClassRegistry, DeclarationRenderer, ImplementationRenderer, WorkerClass,
    baton_member_type, render_declaration, render_implementation,
};
