//! Names derived from a class spec when the spec leaves them out.

use std::path::{Component, Path};

use nanbind_core::{to_camel_case, to_snake_case};
use nanbind_ir::{ClassSpec, FieldSpec, FunctionSpec};

/// Runtime names that cannot be used as-is, with their replacement.
const COLLISIONS: &[(&str, &str)] = &[("new", "create")];

/// Base name of the emitted `.h`/`.cc` pair.
pub fn file_stem(class: &ClassSpec) -> String {
    match class.filename.as_deref().filter(|f| !f.is_empty()) {
        Some(name) => name.to_string(),
        None => to_snake_case(&class.cpp_class_name),
    }
}

/// Runtime-visible name of a function binding.
pub fn function_js_name(function: &FunctionSpec) -> String {
    match function.js_function_name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => js_name(function.binding_name().unwrap_or_default()),
    }
}

/// Runtime-visible name of a field accessor.
pub fn field_js_name(field: &FieldSpec) -> String {
    match field.js_function_name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => js_name(field.accessor_name().unwrap_or_default()),
    }
}

fn js_name(cpp_name: &str) -> String {
    let name = to_camel_case(cpp_name);
    COLLISIONS
        .iter()
        .find(|(colliding, _)| *colliding == name)
        .map(|(_, replacement)| replacement.to_string())
        .unwrap_or(name)
}

/// Include path of a class header as seen from its implementation file.
///
/// `source_dir = "src"`, `include_dir = "include"` gives `../include/<stem>.h`.
pub fn header_include(source_dir: &Path, include_dir: &Path, stem: &str) -> String {
    let depth = source_dir
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count();
    let mut path = "../".repeat(depth);
    for component in include_dir.components() {
        if let Component::Normal(part) = component {
            path.push_str(&part.to_string_lossy());
            path.push('/');
        }
    }
    path.push_str(stem);
    path.push_str(".h");
    path
}
