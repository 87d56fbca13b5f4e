//! Spec model for the nanbind binding generator.
//!
//! These types describe one bindable wrapper class: its native value type,
//! the struct members it exposes through accessors and the native functions
//! it binds. They are plain data, consumed read-only by the render engine.
//!
//! # Architecture
//!
//! ```text
//! nanbind.toml / *.json → nanbind-manifest (loading) → nanbind-ir (ClassSpec) → codegen
//! ```
//!
//! Field names serialize in camelCase (`cppClassName`, `cType`, `isAsync`, ...)
//! so descriptor files keep the shape they have always had.

mod class;
mod field;
mod function;
mod library;

pub use class::ClassSpec;
pub use field::FieldSpec;
pub use function::{ArgSpec, FunctionSpec, ReturnSpec};
pub use library::NativeLibrary;
