//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from class list validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Classes resolved from the manifest and its descriptors.
    pub class_count: usize,
    /// Accessors and functions that will be bound.
    pub binding_count: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            out.preformatted(&format!(
                "  {} class{}, {} binding{}",
                self.class_count,
                if self.class_count == 1 { "" } else { "es" },
                self.binding_count,
                if self.binding_count == 1 { "" } else { "s" }
            ));
        }
    }
}

/// The lints run by `check`.
#[derive(Debug)]
pub struct LintsReport {
    /// `(name, description)` in run order.
    pub lints: Vec<(&'static str, &'static str)>,
}

impl Report for LintsReport {
    fn render(&self, out: &mut dyn Output) {
        let width = self.lints.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

        out.section(&format!("Lints ({})", self.lints.len()));
        for (name, description) in &self.lints {
            out.list_item(&format!("{:<width$}  {}", name, description, width = width));
        }
    }
}
