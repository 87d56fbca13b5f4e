//! C++ identifier rules shared by manifest validation and the render engine.

/// C++ keywords and alternative tokens that cannot name a class or method.
const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char16_t", "char32_t", "class", "compl", "const", "constexpr",
    "const_cast", "continue", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "return", "short", "signed", "sizeof", "static", "static_assert",
    "static_cast", "struct", "switch", "template", "this", "thread_local", "throw", "true", "try",
    "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual", "void", "volatile",
    "wchar_t", "while", "xor", "xor_eq",
];

/// Check if a name is a C++ reserved word
pub fn is_cpp_keyword(name: &str) -> bool {
    CPP_KEYWORDS.contains(&name)
}

/// Validate that a name is usable as a C++ identifier.
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if is_cpp_keyword(name) {
        return Some("name is a C++ reserved word");
    }

    None
}

/// Locals and Baton fields every generated binding declares. An argument
/// spelled like one of these would be declared twice.
pub const GENERATED_LOCALS: &[&str] = &[
    "args",
    "argv",
    "baton",
    "callback",
    "error",
    "error_code",
    "object",
    "result",
    "to",
    "toReturn",
    "try_catch",
    "worker",
];

/// Members every generated wrapper class declares.
pub const GENERATED_MEMBERS: &[&str] =
    &["New", "Initialize", "GetValue", "constructor_template", "raw"];

/// Find the first argument name of one function that cannot be emitted.
///
/// Besides the identifier rules, argument names must stay clear of the
/// generated locals and of each other, including the `from_<name>` and
/// `<name>_copy` temporaries derived from them.
pub fn argument_name_conflict<'a>(names: &[&'a str]) -> Option<(&'a str, String)> {
    for (index, &name) in names.iter().enumerate() {
        if let Some(reason) = validate_identifier(name) {
            return Some((name, format!("is not a valid identifier: {}", reason)));
        }
        if GENERATED_LOCALS.contains(&name) {
            return Some((name, "collides with a generated local".to_string()));
        }
        for &other in &names[..index] {
            if other == name {
                return Some((name, "is used by another argument".to_string()));
            }
        }
        for &other in names.iter().filter(|&&other| other != name) {
            if name == format!("from_{}", other) || name == format!("{}_copy", other) {
                return Some((
                    name,
                    format!("collides with the temporary derived from '{}'", other),
                ));
            }
        }
    }
    None
}

/// Find the first member binding of `class` that collides with generated code.
///
/// `bindings` pairs each method name with whether it is bound asynchronously;
/// an async binding adds a `<name>Baton` struct and a `<name>Worker` class
/// to the class scope.
pub fn member_name_conflict<'a>(
    class: &str,
    bindings: &[(&'a str, bool)],
) -> Option<(&'a str, String)> {
    for &(name, _) in bindings {
        if GENERATED_MEMBERS.contains(&name) {
            return Some((name, "collides with a generated member".to_string()));
        }
        if name == class {
            return Some((name, "collides with the constructor".to_string()));
        }
        for &(other, _) in bindings.iter().filter(|(_, is_async)| *is_async) {
            if name == format!("{}Baton", other) || name == format!("{}Worker", other) {
                return Some((
                    name,
                    format!("collides with the async scaffold of '{}'", other),
                ));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Repository").is_none());
        assert!(validate_identifier("OpenBare").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("Oid2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert_eq!(validate_identifier(""), Some("name cannot be empty"));
        assert_eq!(
            validate_identifier("2fast"),
            Some("name must start with a letter or underscore")
        );
        assert_eq!(
            validate_identifier("open-bare"),
            Some("name must contain only letters, numbers, and underscores")
        );
        assert_eq!(
            validate_identifier("delete"),
            Some("name is a C++ reserved word")
        );
    }

    #[test]
    fn test_is_cpp_keyword() {
        assert!(is_cpp_keyword("class"));
        assert!(is_cpp_keyword("new"));
        assert!(!is_cpp_keyword("New"));
    }

    #[test]
    fn test_argument_name_conflict() {
        assert_eq!(argument_name_conflict(&["out", "path"]), None);
        assert_eq!(
            argument_name_conflict(&["result", "str"]),
            Some(("result", "collides with a generated local".to_string()))
        );
        assert_eq!(
            argument_name_conflict(&["path", "from_path"]),
            Some((
                "from_path",
                "collides with the temporary derived from 'path'".to_string()
            ))
        );
        assert_eq!(
            argument_name_conflict(&["oid_copy", "oid"]).map(|(name, _)| name),
            Some("oid_copy")
        );
        assert_eq!(
            argument_name_conflict(&["out", "out"]).map(|(_, reason)| reason),
            Some("is used by another argument".to_string())
        );
        assert_eq!(
            argument_name_conflict(&["this"]).map(|(_, reason)| reason),
            Some("is not a valid identifier: name is a C++ reserved word".to_string())
        );
    }

    #[test]
    fn test_member_name_conflict() {
        assert_eq!(member_name_conflict("Repository", &[("Open", true)]), None);
        assert_eq!(
            member_name_conflict("Repository", &[("Open", true), ("OpenWorker", false)]),
            Some((
                "OpenWorker",
                "collides with the async scaffold of 'Open'".to_string()
            ))
        );
        assert!(
            member_name_conflict("Repository", &[("OpenBaton", false), ("Open", true)]).is_some()
        );
        assert_eq!(
            member_name_conflict("Repository", &[("OpenWorker", false), ("Open", false)]),
            None
        );
        assert_eq!(
            member_name_conflict("Repository", &[("Repository", false)]),
            Some(("Repository", "collides with the constructor".to_string()))
        );
        assert_eq!(
            member_name_conflict("Oid", &[("GetValue", false)]).map(|(_, reason)| reason),
            Some("collides with a generated member".to_string())
        );
    }
}
