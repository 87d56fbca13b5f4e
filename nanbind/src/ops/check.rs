//! Check operation - class list validation.

use std::path::Path;

use eyre::Result;
use nanbind_codegen::pipeline::{Pipeline, Severity, phases::ValidatePhase};
use nanbind_manifest::Manifest;

use super::describe;
use crate::reports::{CheckReport, LintsReport};

/// Execute the check operation.
///
/// Runs the pipeline to validate the classes and returns diagnostics.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let (ctx, result) = Pipeline::new().check(manifest.clone());
    if let Err(err) = result {
        if !ctx.has_errors() {
            return Err(err.wrap_err("Validation failed"));
        }
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = describe(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let bindings = ctx
        .computed
        .as_ref()
        .map(|computed| computed.total_bindings())
        .unwrap_or_default();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        class_count: manifest.classes.len(),
        binding_count: bindings,
        errors,
        warnings,
        infos,
    })
}

/// Describe the lints run by [`check`].
pub fn lints() -> LintsReport {
    let phase = ValidatePhase::new();
    LintsReport {
        lints: phase
            .lints()
            .map(|lint| (lint.name(), lint.description()))
            .collect(),
    }
}
