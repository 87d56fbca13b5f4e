//! Render precondition failures.

use thiserror::Error;

/// A class spec that cannot be rendered.
///
/// Rendering checks these before emitting anything, so a failed render never
/// produces partial text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("class spec is missing cppClassName")]
    MissingClassName,

    #[error("'{name}' is not a valid class name: {reason}")]
    InvalidClassName { name: String, reason: &'static str },

    #[error("class '{class}' binds '{name}' more than once")]
    DuplicateFunction { class: String, name: String },

    #[error("'{name}' in class '{class}' {reason}")]
    MemberCollision {
        class: String,
        name: String,
        reason: String,
    },

    #[error("argument '{name}' of '{class}::{function}' {reason}")]
    InvalidArgumentName {
        class: String,
        function: String,
        name: String,
        reason: String,
    },

    #[error("function '{class}::{name}' has no cFunctionName to call")]
    MissingNativeFunction { class: String, name: String },

    #[error("accessor '{class}::{name}' needs the class to have a cType")]
    AccessorWithoutNativeType { class: String, name: String },
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;
