//! Struct member description.

use serde::{Deserialize, Serialize};

/// One member of the native struct, optionally exposed through an accessor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Member name inside the native struct.
    #[serde(default)]
    pub name: String,

    /// Member type, e.g. `const char *`.
    #[serde(default)]
    pub c_type: String,

    /// Skip this field everywhere.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ignore: bool,

    /// Name of the generated accessor method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpp_function_name: Option<String>,

    /// Type used inside a forward-declared struct body instead of `c_type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub struct_type: Option<String>,

    /// Member name used inside a forward-declared struct body instead of `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub struct_name: Option<String>,

    /// Accessor name exposed to the runtime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_function_name: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, c_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            c_type: c_type.into(),
            ..Self::default()
        }
    }

    /// Set the accessor method name.
    pub fn accessor(mut self, cpp_function_name: impl Into<String>) -> Self {
        self.cpp_function_name = Some(cpp_function_name.into());
        self
    }

    /// Mark the field as ignored.
    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Override the type used in a forward declaration.
    pub fn struct_type(mut self, ty: impl Into<String>) -> Self {
        self.struct_type = Some(ty.into());
        self
    }

    /// Override the member name used in a forward declaration.
    pub fn struct_name(mut self, name: impl Into<String>) -> Self {
        self.struct_name = Some(name.into());
        self
    }

    /// The guard shared by the struct member and the accessor emission.
    pub fn is_emittable(&self) -> bool {
        !self.ignore && self.accessor_name().is_some()
    }

    /// The accessor name, treating an empty string as absent.
    pub fn accessor_name(&self) -> Option<&str> {
        self.cpp_function_name.as_deref().filter(|n| !n.is_empty())
    }

    /// Type of the member in a forward-declared struct.
    pub fn member_type(&self) -> &str {
        self.struct_type.as_deref().unwrap_or(&self.c_type)
    }

    /// Name of the member in a forward-declared struct (and on the native value).
    pub fn member_name(&self) -> &str {
        self.struct_name.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_emittable() {
        assert!(FieldSpec::new("id", "git_oid").accessor("Id").is_emittable());
        assert!(!FieldSpec::new("id", "git_oid").is_emittable());
        assert!(!FieldSpec::new("id", "git_oid").accessor("").is_emittable());
        assert!(
            !FieldSpec::new("id", "git_oid")
                .accessor("Id")
                .ignored()
                .is_emittable()
        );
    }

    #[test]
    fn test_struct_overrides() {
        let field = FieldSpec::new("flags", "unsigned int");
        assert_eq!(field.member_type(), "unsigned int");
        assert_eq!(field.member_name(), "flags");

        let field = field.struct_type("uint32_t").struct_name("raw_flags");
        assert_eq!(field.member_type(), "uint32_t");
        assert_eq!(field.member_name(), "raw_flags");
    }
}
