//! Value conversion between native values and runtime values.
//!
//! Strings cross as `String::Utf8Value` copies, integers as numbers, `bool`
//! as booleans. Every other type is a library type exposed through its own
//! wrapper class.

use indexmap::IndexMap;
use nanbind_core::{CTypeKind, classify_c_type, is_pointer, normalize_c_type, to_title_case};
use nanbind_ir::{ArgSpec, ClassSpec};

use crate::builder::CodeFragment;

/// Maps normalized native types to the wrapper classes that hold them.
///
/// Types nobody wraps fall back to their title-cased name
/// (`git_oid` -> `GitOid`).
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    by_type: IndexMap<String, String>,
}

impl ClassRegistry {
    /// Register every class owning a native type.
    pub fn new<'a>(classes: impl IntoIterator<Item = &'a ClassSpec>) -> Self {
        let mut by_type = IndexMap::new();
        for class in classes {
            if let Some(c_type) = class.native_type() {
                by_type
                    .entry(normalize_c_type(c_type))
                    .or_insert_with(|| class.cpp_class_name.clone());
            }
        }
        Self { by_type }
    }

    /// Wrapper class name for a native type.
    pub fn class_for(&self, c_type: &str) -> String {
        let normalized = normalize_c_type(c_type);
        match self.by_type.get(&normalized) {
            Some(class) => class.clone(),
            None => to_title_case(&normalized),
        }
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

/// How one value is converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Conversion {
    String,
    Number,
    Boolean,
    Wrapped { class: String, by_value: bool },
}

impl Conversion {
    pub(crate) fn of(c_type: &str, registry: &ClassRegistry) -> Self {
        match classify_c_type(c_type) {
            CTypeKind::String => Self::String,
            CTypeKind::Number => Self::Number,
            CTypeKind::Boolean => Self::Boolean,
            CTypeKind::Wrapped(_) => Self::Wrapped {
                class: registry.class_for(c_type),
                by_value: !is_pointer(c_type),
            },
        }
    }

    fn check(&self) -> &'static str {
        match self {
            Self::String => "IsString",
            Self::Number => "IsNumber",
            Self::Boolean => "IsBoolean",
            Self::Wrapped { .. } => "IsObject",
        }
    }

    fn label(&self) -> &str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Wrapped { class, .. } => class,
        }
    }
}

/// Throw unless call argument `index` can be converted to `arg`.
pub(crate) fn argument_check(
    arg: &ArgSpec,
    index: usize,
    registry: &ClassRegistry,
) -> Vec<CodeFragment> {
    let conversion = Conversion::of(&arg.c_type, registry);
    vec![
        CodeFragment::line(format!(
            "if (args.Length() == {} || !args[{}]->{}()) {{",
            index,
            index,
            conversion.check()
        )),
        CodeFragment::indent(vec![CodeFragment::line(format!(
            "return NanThrowError(\"{} {} is required.\");",
            conversion.label(),
            arg.name
        ))]),
        CodeFragment::line("}"),
    ]
}

/// Convert call argument `index` into the local `from_<name>`.
pub(crate) fn unwrap_argument(
    arg: &ArgSpec,
    index: usize,
    registry: &ClassRegistry,
) -> Vec<CodeFragment> {
    let ty = &arg.c_type;
    let name = &arg.name;
    match Conversion::of(ty, registry) {
        Conversion::String => vec![
            CodeFragment::line(format!(
                "String::Utf8Value {}(args[{}]->ToString());",
                name, index
            )),
            CodeFragment::line(format!(
                "{} from_{} = ({}) strdup(*{});",
                ty, name, ty, name
            )),
        ],
        Conversion::Number => vec![CodeFragment::line(format!(
            "{} from_{} = ({}) args[{}]->ToNumber()->Value();",
            ty, name, ty, index
        ))],
        Conversion::Boolean => vec![CodeFragment::line(format!(
            "{} from_{} = args[{}]->ToBoolean()->Value();",
            ty, name, index
        ))],
        Conversion::Wrapped { class, by_value } => vec![CodeFragment::line(format!(
            "{} from_{} = {}ObjectWrap::Unwrap<{}>(args[{}]->ToObject())->GetValue();",
            ty,
            name,
            if by_value { "*" } else { "" },
            class,
            index
        ))],
    }
}

/// Whether the converted argument is a heap copy released after the call.
pub(crate) fn is_duplicated(arg: &ArgSpec, registry: &ClassRegistry) -> bool {
    Conversion::of(&arg.c_type, registry) == Conversion::String
}

/// Whether a caller-supplied argument is a wrapper object the call borrows.
pub(crate) fn is_wrapped(arg: &ArgSpec, registry: &ClassRegistry) -> bool {
    matches!(
        Conversion::of(&arg.c_type, registry),
        Conversion::Wrapped { .. }
    )
}

/// Convert the native `value` of type `c_type` into the runtime handle `target`.
///
/// `name` seeds temporaries so several conversions can share a scope.
pub(crate) fn wrap_value(
    value: &str,
    c_type: &str,
    name: &str,
    target: &str,
    registry: &ClassRegistry,
) -> Vec<CodeFragment> {
    match Conversion::of(c_type, registry) {
        Conversion::String => null_checked(
            value,
            format!("{} = NanNew<String>({});", target, value),
            target,
        ),
        Conversion::Number => vec![CodeFragment::line(format!(
            "{} = NanNew<Number>({});",
            target, value
        ))],
        Conversion::Boolean => vec![CodeFragment::line(format!(
            "{} = NanNew<Boolean>({});",
            target, value
        ))],
        Conversion::Wrapped {
            class,
            by_value: false,
        } => null_checked(
            &format!("{} != NULL", value),
            format!("{} = {}::New((void *){});", target, class, value),
            target,
        ),
        Conversion::Wrapped {
            class,
            by_value: true,
        } => {
            let bare = bare_type(c_type);
            let copy = format!("{}_copy", name);
            vec![
                CodeFragment::line(format!(
                    "{} *{} = ({} *)malloc(sizeof({}));",
                    bare, copy, bare, bare
                )),
                CodeFragment::line(format!(
                    "memcpy({}, &{}, sizeof({}));",
                    copy, value, bare
                )),
                CodeFragment::line(format!("{} = {}::New((void *){});", target, class, copy)),
            ]
        }
    }
}

fn null_checked(condition: &str, present: String, target: &str) -> Vec<CodeFragment> {
    vec![
        CodeFragment::line(format!("if ({}) {{", condition)),
        CodeFragment::indent(vec![CodeFragment::Line(present)]),
        CodeFragment::line("} else {"),
        CodeFragment::indent(vec![CodeFragment::line(format!("{} = NanNull();", target))]),
        CodeFragment::line("}"),
    ]
}

/// The type spelled without qualifiers or pointers, case preserved.
fn bare_type(c_type: &str) -> String {
    c_type
        .replace('*', " ")
        .split_whitespace()
        .filter(|word| *word != "const")
        .collect::<Vec<_>>()
        .join(" ")
}
