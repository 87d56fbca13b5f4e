//! Bindable class description.

use serde::{Deserialize, Serialize};

use crate::{FieldSpec, FunctionSpec};

/// One bindable wrapper class.
///
/// A class with a `c_type` owns exactly one native value (the `raw` member of
/// the generated class) for its whole lifetime. Without a `c_type` the
/// wrapper carries no native payload at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSpec {
    /// Name of the generated wrapper class.
    #[serde(default)]
    pub cpp_class_name: String,

    /// Native value type held by the wrapper, e.g. `git_repository`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_type: Option<String>,

    /// Emit a struct declaration for `c_type` instead of relying on the
    /// library headers to declare it.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub forward_declare: bool,

    /// Include paths emitted verbatim, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<FunctionSpec>,

    /// Name the class is exported under; defaults to `cpp_class_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_class_name: Option<String>,

    /// Native function releasing `raw` when the wrapper is destroyed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_function_name: Option<String>,

    /// Base name of the emitted files, without extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl ClassSpec {
    /// Create a class spec with the given wrapper name and nothing else.
    pub fn new(cpp_class_name: impl Into<String>) -> Self {
        Self {
            cpp_class_name: cpp_class_name.into(),
            ..Self::default()
        }
    }

    /// Set the native value type.
    pub fn c_type(mut self, c_type: impl Into<String>) -> Self {
        self.c_type = Some(c_type.into());
        self
    }

    /// Request a forward struct declaration for the native type.
    pub fn forward_declare(mut self) -> Self {
        self.forward_declare = true;
        self
    }

    /// Add an include dependency.
    pub fn dependency(mut self, path: impl Into<String>) -> Self {
        self.dependencies.push(path.into());
        self
    }

    /// Add a field.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a function.
    pub fn function(mut self, function: FunctionSpec) -> Self {
        self.functions.push(function);
        self
    }

    /// Set the native free function.
    pub fn free_function(mut self, name: impl Into<String>) -> Self {
        self.free_function_name = Some(name.into());
        self
    }

    /// Whether the wrapper owns a native value.
    pub fn has_native_type(&self) -> bool {
        self.native_type().is_some()
    }

    /// The native value type, treating an empty string as absent.
    pub fn native_type(&self) -> Option<&str> {
        self.c_type.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Name the class is exported under.
    pub fn exported_name(&self) -> &str {
        self.js_class_name
            .as_deref()
            .unwrap_or(&self.cpp_class_name)
    }

    /// Fields that produce a struct member and an accessor.
    pub fn emittable_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.is_emittable())
    }

    /// Functions that produce a binding.
    pub fn emittable_functions(&self) -> impl Iterator<Item = &FunctionSpec> {
        self.functions.iter().filter(|f| f.is_emittable())
    }

    /// Whether a forward struct declaration will be emitted.
    pub fn needs_forward_declaration(&self) -> bool {
        self.forward_declare && self.has_native_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArgSpec;

    #[test]
    fn test_deserialize_descriptor_shape() {
        let json = r#"{
            "cppClassName": "Repository",
            "cType": "git_repository",
            "freeFunctionName": "git_repository_free",
            "dependencies": ["../include/oid.h"],
            "functions": [{
                "cppFunctionName": "OpenBare",
                "cFunctionName": "git_repository_open_bare",
                "isAsync": true,
                "args": [
                    { "name": "out", "cType": "git_repository**", "isReturn": true },
                    { "name": "path", "cType": "const char*" }
                ]
            }]
        }"#;

        let spec: ClassSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.cpp_class_name, "Repository");
        assert_eq!(spec.native_type(), Some("git_repository"));
        assert!(!spec.forward_declare);
        assert_eq!(spec.dependencies, vec!["../include/oid.h"]);
        assert_eq!(spec.functions.len(), 1);
        assert!(spec.functions[0].is_async);
        assert!(spec.functions[0].args[0].is_return);
        assert!(!spec.functions[0].args[1].is_return);
    }

    #[test]
    fn test_missing_class_name_deserializes_empty() {
        let spec: ClassSpec = serde_json::from_str("{}").unwrap();
        assert!(spec.cpp_class_name.is_empty());
        assert!(!spec.has_native_type());
    }

    #[test]
    fn test_blank_c_type_is_absent() {
        let spec = ClassSpec::new("Blank").c_type("  ");
        assert!(!spec.has_native_type());
        assert_eq!(spec.native_type(), None);
    }

    #[test]
    fn test_forward_declaration_requires_native_type() {
        assert!(!ClassSpec::new("Opts").forward_declare().needs_forward_declaration());
        assert!(
            ClassSpec::new("Opts")
                .c_type("git_opts")
                .forward_declare()
                .needs_forward_declaration()
        );
    }

    #[test]
    fn test_emittable_filters_share_guard() {
        let spec = ClassSpec::new("Sig")
            .c_type("git_signature")
            .field(FieldSpec::new("name", "const char *").accessor("Name"))
            .field(FieldSpec::new("email", "const char *"))
            .field(FieldSpec::new("when", "git_time").accessor("When").ignored())
            .function(FunctionSpec::new("Now").arg(ArgSpec::new("out", "git_signature **").returned()))
            .function(FunctionSpec::new("Free").ignored());

        let fields: Vec<_> = spec.emittable_fields().map(|f| f.name.as_str()).collect();
        let functions: Vec<_> = spec
            .emittable_functions()
            .filter_map(|f| f.cpp_function_name.as_deref())
            .collect();

        assert_eq!(fields, vec!["name"]);
        assert_eq!(functions, vec!["Now"]);
    }

    #[test]
    fn test_exported_name_defaults_to_class_name() {
        let mut spec = ClassSpec::new("Repository");
        assert_eq!(spec.exported_name(), "Repository");

        spec.js_class_name = Some("Repo".to_string());
        assert_eq!(spec.exported_name(), "Repo");
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json = serde_json::to_string(&ClassSpec::new("Oid")).unwrap();
        assert_eq!(json, r#"{"cppClassName":"Oid"}"#);
    }
}
