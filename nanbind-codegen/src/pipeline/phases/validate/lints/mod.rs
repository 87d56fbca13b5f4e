//! Built-in lints.

mod accessor_without_type;
mod async_result_discarded;
mod duplicate_function;
mod forward_declare_without_type;
mod include_guard_collision;
mod missing_native_function;

pub use accessor_without_type::AccessorWithoutTypeLint;
pub use async_result_discarded::AsyncResultDiscardedLint;
pub use duplicate_function::DuplicateFunctionLint;
pub use forward_declare_without_type::ForwardDeclareWithoutTypeLint;
pub use include_guard_collision::IncludeGuardCollisionLint;
pub use missing_native_function::MissingNativeFunctionLint;

#[cfg(test)]
pub(crate) fn lint_toml(lint: &dyn super::Lint, content: &str) -> Vec<crate::pipeline::Diagnostic> {
    use std::str::FromStr;

    let manifest =
        nanbind_manifest::Manifest::from_str(content).expect("Failed to parse test manifest");
    let mut diagnostics = Vec::new();
    lint.check(&manifest, &mut diagnostics);
    diagnostics
}
