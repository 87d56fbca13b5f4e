//! List operation - classes and their bindings.

use nanbind_codegen::naming::{field_js_name, file_stem, function_js_name};
use nanbind_manifest::Manifest;

use crate::reports::{BindingEntry, ClassEntry, ListReport};

/// Collect every class with the bindings it will expose.
pub fn list(manifest: &Manifest) -> ListReport {
    let classes = manifest
        .classes
        .iter()
        .map(|class| ClassEntry {
            name: class.cpp_class_name.clone(),
            exported_name: class.exported_name().to_string(),
            c_type: class.native_type().map(str::to_string),
            file_stem: file_stem(class),
            accessors: class
                .emittable_fields()
                .filter_map(|field| {
                    field.accessor_name().map(|accessor| BindingEntry {
                        name: accessor.to_string(),
                        js_name: field_js_name(field),
                        is_async: false,
                        is_prototype: true,
                    })
                })
                .collect(),
            functions: class
                .emittable_functions()
                .filter_map(|function| {
                    function.binding_name().map(|binding| BindingEntry {
                        name: binding.to_string(),
                        js_name: function_js_name(function),
                        is_async: function.is_async,
                        is_prototype: function.is_prototype_method,
                    })
                })
                .collect(),
        })
        .collect();

    ListReport { classes }
}
