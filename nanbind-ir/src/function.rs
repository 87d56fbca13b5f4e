//! Native function description.

use serde::{Deserialize, Serialize};

/// One bindable native operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSpec {
    /// Name of the generated binding method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpp_function_name: Option<String>,

    /// Skip this function everywhere.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ignore: bool,

    /// Bind through a Baton and Worker instead of a blocking call.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_async: bool,

    /// Parameters of the native function, in call order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<ArgSpec>,

    /// Native function invoked by the binding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_function_name: Option<String>,

    /// Method name exposed to the runtime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_function_name: Option<String>,

    /// Register on instances rather than on the constructor.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_prototype_method: bool,

    /// Native return value.
    #[serde(default, rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_type: Option<ReturnSpec>,
}

impl FunctionSpec {
    pub fn new(cpp_function_name: impl Into<String>) -> Self {
        Self {
            cpp_function_name: Some(cpp_function_name.into()),
            ..Self::default()
        }
    }

    /// Mark as asynchronous.
    pub fn asynchronous(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Mark as ignored.
    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Add an argument.
    pub fn arg(mut self, arg: ArgSpec) -> Self {
        self.args.push(arg);
        self
    }

    /// Set the native function name.
    pub fn calls(mut self, c_function_name: impl Into<String>) -> Self {
        self.c_function_name = Some(c_function_name.into());
        self
    }

    /// Register on instances.
    pub fn prototype(mut self) -> Self {
        self.is_prototype_method = true;
        self
    }

    /// Set the native return value.
    pub fn returns(mut self, ret: ReturnSpec) -> Self {
        self.return_type = Some(ret);
        self
    }

    /// The guard for every emission site of this function.
    pub fn is_emittable(&self) -> bool {
        !self.ignore && self.binding_name().is_some()
    }

    /// The binding method name, treating an empty string as absent.
    pub fn binding_name(&self) -> Option<&str> {
        self.cpp_function_name.as_deref().filter(|n| !n.is_empty())
    }

    /// Arguments the native call writes its results into.
    pub fn return_args(&self) -> impl Iterator<Item = &ArgSpec> {
        self.args.iter().filter(|a| a.is_return)
    }

    /// Arguments supplied by the caller at runtime.
    pub fn input_args(&self) -> impl Iterator<Item = &ArgSpec> {
        self.args.iter().filter(|a| !a.is_return && !a.is_receiver())
    }

    /// Whether the native return value is an error code.
    pub fn returns_error_code(&self) -> bool {
        self.return_type.as_ref().is_some_and(|r| r.is_error_code)
    }

    /// Whether the native return value is neither void nor an error code.
    pub fn returns_value(&self) -> bool {
        self.return_type
            .as_ref()
            .is_some_and(|r| !r.is_error_code && !r.is_void())
    }
}

/// One parameter of a native function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgSpec {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub c_type: String,

    /// Output parameter written by the native call.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_return: bool,

    /// Filled from the receiving wrapper's native value.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_self: bool,
}

impl ArgSpec {
    pub fn new(name: impl Into<String>, c_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            c_type: c_type.into(),
            ..Self::default()
        }
    }

    /// Mark as an output parameter.
    pub fn returned(mut self) -> Self {
        self.is_return = true;
        self
    }

    /// Mark as the receiver.
    pub fn receiver(mut self) -> Self {
        self.is_self = true;
        self
    }

    /// Filled from the receiving wrapper. An output parameter never is, even
    /// when also flagged `isSelf`.
    pub fn is_receiver(&self) -> bool {
        self.is_self && !self.is_return
    }
}

/// Native return value of a function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnSpec {
    #[serde(default)]
    pub c_type: String,

    /// Non-success values signal a native failure.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error_code: bool,
}

impl ReturnSpec {
    pub fn new(c_type: impl Into<String>) -> Self {
        Self {
            c_type: c_type.into(),
            is_error_code: false,
        }
    }

    /// An `int` error code.
    pub fn error_code() -> Self {
        Self {
            c_type: "int".to_string(),
            is_error_code: true,
        }
    }

    pub fn is_void(&self) -> bool {
        let ty = self.c_type.trim();
        ty.is_empty() || ty == "void"
    }
}
