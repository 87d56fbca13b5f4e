//! Data computed once from the class list and shared by rendering and reports.

use indexmap::IndexMap;
use nanbind_ir::ClassSpec;
use serde::Serialize;

use crate::{naming::file_stem, render::ClassRegistry};

/// What one class will generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSummary {
    pub c_type: Option<String>,
    pub file_stem: String,
    pub forward_declared: bool,
    pub accessors: usize,
    pub sync_functions: usize,
    pub async_functions: usize,
}

impl ClassSummary {
    fn new(class: &ClassSpec) -> Self {
        let (async_functions, sync_functions) = class
            .emittable_functions()
            .fold((0, 0), |(a, s), f| if f.is_async { (a + 1, s) } else { (a, s + 1) });

        Self {
            c_type: class.native_type().map(str::to_string),
            file_stem: file_stem(class),
            forward_declared: class.needs_forward_declaration(),
            accessors: class.emittable_fields().count(),
            sync_functions,
            async_functions,
        }
    }

    /// Methods bound on the wrapper besides the fixed ones.
    pub fn bindings(&self) -> usize {
        self.accessors + self.sync_functions + self.async_functions
    }
}

/// Pre-computed data for a class list.
#[derive(Debug, Clone, Default)]
pub struct ComputedData {
    /// Native type to wrapper class mapping used by value conversion.
    pub registry: ClassRegistry,
    /// Per-class summaries keyed by class name, in manifest order.
    pub classes: IndexMap<String, ClassSummary>,
}

impl ComputedData {
    pub fn from_classes(classes: &[ClassSpec]) -> Self {
        Self {
            registry: ClassRegistry::new(classes),
            classes: classes
                .iter()
                .map(|c| (c.cpp_class_name.clone(), ClassSummary::new(c)))
                .collect(),
        }
    }

    pub fn total_bindings(&self) -> usize {
        self.classes.values().map(ClassSummary::bindings).sum()
    }

    pub fn has_async(&self) -> bool {
        self.classes.values().any(|c| c.async_functions > 0)
    }
}
