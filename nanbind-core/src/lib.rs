//! Core utilities and types for the nanbind binding generator.
//!
//! This crate provides the naming rules, C type helpers and file writing
//! shared by the rest of the workspace.

mod ctype;
mod file;
mod identifier;
mod utils;

// C type helpers
pub use ctype::{CTypeKind, classify_c_type, is_pointer, normalize_c_type, strip_pointer};
// File operations
pub use file::{GeneratedFile, Overwrite, WriteResult};
// Identifier rules
pub use identifier::{
    GENERATED_LOCALS, GENERATED_MEMBERS, argument_name_conflict, is_cpp_keyword,
    member_name_conflict, validate_identifier,
};
// String utilities
pub use utils::{include_guard, to_camel_case, to_snake_case, to_title_case};
