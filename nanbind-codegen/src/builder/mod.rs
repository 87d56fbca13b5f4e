//! Indented text assembly for emitted sources.
//!
//! Surfaces write straight into a [`CodeBuilder`]; self-contained pieces
//! such as the async scaffold implement [`Renderable`] and are emitted
//! as [`CodeFragment`] trees.

mod code_builder;
mod fragment;

pub use code_builder::CodeBuilder;
pub use fragment::{CodeFragment, Renderable};
