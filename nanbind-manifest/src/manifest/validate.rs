//! Producer-side checks on parsed class lists.

use miette::SourceSpan;
use nanbind_core::{argument_name_conflict, member_name_conflict};
use nanbind_ir::ClassSpec;

use crate::{Result, Source};

/// Validate a list of classes parsed from `source`.
pub(crate) fn validate_classes(classes: &[ClassSpec], source: &Source) -> Result<()> {
    for (index, class) in classes.iter().enumerate() {
        validate_class(class, index, source)?;
    }
    Ok(())
}

fn validate_class(class: &ClassSpec, index: usize, source: &Source) -> Result<()> {
    let name = class.cpp_class_name.as_str();
    if name.trim().is_empty() {
        return Err(source.invalid(format!(
            "class #{} in '{}' is missing cppClassName",
            index + 1,
            source.name()
        )));
    }
    source.check_name(name, "class".into(), find_value_span(source.text(), name, 0))?;

    let bindings: Vec<(&str, bool)> = class
        .emittable_fields()
        .filter_map(|f| f.accessor_name().map(|n| (n, false)))
        .chain(
            class
                .emittable_functions()
                .filter_map(|f| f.binding_name().map(|n| (n, f.is_async))),
        )
        .collect();

    let mut seen: Vec<&str> = Vec::new();
    for &(member, _) in &bindings {
        let span = find_value_span(source.text(), member, 0);
        source.check_name(member, format!("member in '{}'", name), span)?;

        if seen.contains(&member) {
            return Err(source.duplicate(
                member,
                name,
                [span, find_value_span(source.text(), member, 1)],
            ));
        }
        seen.push(member);
    }

    if let Some((member, reason)) = member_name_conflict(name, &bindings) {
        // the class name itself comes first in the source
        let nth = usize::from(member == name);
        return Err(source.invalid_at(
            format!("'{}' in class '{}' {}", member, name, reason),
            find_value_span(source.text(), member, nth),
        ));
    }

    for function in class.emittable_functions() {
        let names: Vec<&str> = function.args.iter().map(|a| a.name.as_str()).collect();
        if let Some((arg, reason)) = argument_name_conflict(&names) {
            return Err(source.invalid_at(
                format!(
                    "argument '{}' of '{}::{}' {}",
                    arg,
                    name,
                    function.binding_name().unwrap_or_default(),
                    reason
                ),
                find_value_span(source.text(), arg, 0),
            ));
        }
    }

    Ok(())
}

/// Find the span of the `nth` quoted occurrence of `name` in TOML or JSON source.
///
/// Matches `"name"` and `'name'`, returning the span of the name without quotes.
pub(crate) fn find_value_span(src: &str, name: &str, nth: usize) -> Option<SourceSpan> {
    let mut hits: Vec<usize> = [format!("\"{}\"", name), format!("'{}'", name)]
        .iter()
        .flat_map(|pattern| src.match_indices(pattern.as_str()).map(|(pos, _)| pos))
        .collect();
    hits.sort_unstable();

    // +1 to skip the opening quote
    hits.get(nth)
        .map(|pos| SourceSpan::from((pos + 1, name.len())))
}
