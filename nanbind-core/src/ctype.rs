//! Helpers for reasoning about C type spellings.
//!
//! Types arrive as free-form strings (`const char *`, `git_repository**`),
//! so everything here works on the text, not on a parsed declarator.

use crate::utils::to_title_case;

/// How a C type crosses the native/runtime boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CTypeKind {
    /// `char` based strings.
    String,
    /// Integer types.
    Number,
    /// `bool`.
    Boolean,
    /// A library type exposed through its own wrapper class.
    Wrapped(String),
}

const NUMBER_TYPES: &[&str] = &[
    "short", "int", "long", "int16_t", "int32_t", "int64_t", "size_t", "uint16_t", "uint32_t",
    "uint64_t",
];

/// Reduce a C type to its bare name: lowercase, without qualifiers or pointers.
///
/// `const char *` -> `char`, `git_repository **` -> `git_repository`.
pub fn normalize_c_type(c_type: &str) -> String {
    c_type
        .to_lowercase()
        .replace('*', " ")
        .split_whitespace()
        .filter(|word| !matches!(*word, "const" | "unsigned" | "struct"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn is_pointer(c_type: &str) -> bool {
    c_type.contains('*')
}

/// Remove exactly one trailing level of pointer indirection.
///
/// `git_repository**` -> `git_repository*`, `git_oid *` -> `git_oid`.
/// Types without a trailing `*` come back trimmed but otherwise unchanged.
pub fn strip_pointer(c_type: &str) -> String {
    let trimmed = c_type.trim_end();
    match trimmed.strip_suffix('*') {
        Some(rest) => rest.trim_end().to_string(),
        None => trimmed.to_string(),
    }
}

/// Decide how a C type is converted to and from runtime values.
pub fn classify_c_type(c_type: &str) -> CTypeKind {
    let normalized = normalize_c_type(c_type);
    match normalized.as_str() {
        "char" => CTypeKind::String,
        "bool" => CTypeKind::Boolean,
        n if NUMBER_TYPES.contains(&n) => CTypeKind::Number,
        n => CTypeKind::Wrapped(to_title_case(n)),
    }
}
