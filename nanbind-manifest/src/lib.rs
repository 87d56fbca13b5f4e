//! Loading and validation of nanbind manifests and class descriptors.
//!
//! A manifest (`nanbind.toml`) configures the wrapped library and the output
//! layout, and lists the classes to bind, either inline or through JSON
//! descriptor files. Everything that comes out of this crate has passed
//! producer-side validation, so the render engine can treat the specs as
//! well-formed.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod descriptor;
mod error;
mod manifest;

pub use descriptor::{load_descriptor, parse_descriptor};
pub use error::{Error, Result, Source};
pub use manifest::{Manifest, NanbindToml, OutputConfig, parse_manifest};
pub use nanbind_ir::{ArgSpec, ClassSpec, FieldSpec, FunctionSpec, NativeLibrary, ReturnSpec};
