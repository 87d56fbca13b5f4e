//! Shared naming functions for code generation.

/// Convert to TitleCase, splitting on `_` and `/` (e.g., "git_repository" -> "GitRepository").
pub fn to_title_case(s: &str) -> String {
    s.split(['_', '/'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert to camelCase (e.g., "OpenBare" -> "openBare", "open_bare" -> "openBare").
pub fn to_camel_case(s: &str) -> String {
    let title = to_title_case(s);
    let mut chars = title.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert to snake_case (e.g., "OdbObject" -> "odb_object").
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 && !result.ends_with('_') {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Include guard token for a class (e.g., "Repository" -> "REPOSITORY_H").
pub fn include_guard(class_name: &str) -> String {
    format!("{}_H", class_name.to_uppercase())
}
