//! The render engine: pure functions from a [`ClassSpec`] to source text.
//!
//! - [`DeclarationRenderer`] - the `.h` declaration surface
//! - [`ImplementationRenderer`] - the `.cc` implementation surface
//! - [`BatonStruct`], [`WorkerClass`] - the async scaffold shared by both
//! - [`ClassRegistry`] - maps native types to the wrapper classes exposing them

mod convert;
mod declaration;
mod implementation;
mod scaffold;

use std::collections::HashSet;

pub use convert::ClassRegistry;
pub use declaration::{DeclarationRenderer, render_declaration};
pub use implementation::{ImplementationRenderer, render_implementation};
use nanbind_core::{argument_name_conflict, member_name_conflict, validate_identifier};
use nanbind_ir::ClassSpec;
pub use scaffold::{BatonStruct, WorkerClass, baton_member_type};

use crate::error::{RenderError, RenderResult};

/// Checks shared by both surfaces.
///
/// Accessors and functions share one method namespace in the wrapper class,
/// so a name bound twice across either list is rejected, as is one that
/// collides with a generated member. Argument names must not shadow the
/// locals a binding declares.
pub(crate) fn check_class(class: &ClassSpec) -> RenderResult<()> {
    let name = class.cpp_class_name.as_str();
    if name.trim().is_empty() {
        return Err(RenderError::MissingClassName);
    }
    if let Some(reason) = validate_identifier(name) {
        return Err(RenderError::InvalidClassName {
            name: name.to_string(),
            reason,
        });
    }

    let bindings: Vec<(&str, bool)> = class
        .emittable_fields()
        .filter_map(|f| f.accessor_name().map(|n| (n, false)))
        .chain(
            class
                .emittable_functions()
                .filter_map(|f| f.binding_name().map(|n| (n, f.is_async))),
        )
        .collect();

    let mut seen = HashSet::new();
    for &(binding, _) in &bindings {
        if !seen.insert(binding) {
            return Err(RenderError::DuplicateFunction {
                class: name.to_string(),
                name: binding.to_string(),
            });
        }
    }
    if let Some((binding, reason)) = member_name_conflict(name, &bindings) {
        return Err(RenderError::MemberCollision {
            class: name.to_string(),
            name: binding.to_string(),
            reason,
        });
    }

    for function in class.emittable_functions() {
        let names: Vec<&str> = function.args.iter().map(|a| a.name.as_str()).collect();
        if let Some((arg, reason)) = argument_name_conflict(&names) {
            return Err(RenderError::InvalidArgumentName {
                class: name.to_string(),
                function: function.binding_name().unwrap_or_default().to_string(),
                name: arg.to_string(),
                reason,
            });
        }
    }

    Ok(())
}
