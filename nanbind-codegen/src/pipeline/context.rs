//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use nanbind_manifest::Manifest;

use super::diagnostic::{Diagnostic, Severity};
use crate::analysis::ComputedData;

/// State carried through every phase.
#[derive(Debug)]
pub struct CompilationContext {
    /// The resolved manifest (inline and descriptor classes).
    pub manifest: Manifest,
    /// Analysis results (populated by AnalyzePhase).
    pub computed: Option<ComputedData>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            computed: None,
            diagnostics: Vec::new(),
        }
    }

    /// Diagnostics of one severity, in the order they were raised.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// The analysis results; an error until AnalyzePhase has run.
    pub fn computed(&self) -> Result<&ComputedData> {
        self.computed
            .as_ref()
            .ok_or_else(|| eyre!("no analysis results; the analyze phase has not run"))
    }
}
