//! Generate command report data structures.

use std::path::PathBuf;

use nanbind_codegen::ClassSummary;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Header of the wrapped C library.
    pub library_header: String,
    /// Per-class summaries, in manifest order.
    pub classes: Vec<ClassLine>,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Error messages that stopped generation.
    pub errors: Vec<String>,
    /// Generation result; absent when validation failed.
    pub result: Option<GenerationResult>,
}

/// One class in the generation summary.
#[derive(Debug)]
pub struct ClassLine {
    pub name: String,
    pub summary: ClassSummary,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files created or changed.
    pub written: Vec<String>,
    /// Files already up to date.
    pub unchanged: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl GenerateReport {
    /// Whether generation ran (no validation errors).
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Library", &self.library_header);
        out.newline();

        out.section(&format!("Classes ({})", self.classes.len()));
        for class in &self.classes {
            out.list_item(&describe_class(class));
        }
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        for path in &written.written {
            out.added_item(path);
        }
        if !written.unchanged.is_empty() {
            out.preformatted(&format!("  {} unchanged", written.unchanged.len()));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            Some(GenerationResult::Written(written)) => self.render_written(out, written),
            Some(GenerationResult::Preview(preview)) => self.render_preview(out, preview),
            None => {}
        }
    }
}

fn describe_class(class: &ClassLine) -> String {
    let summary = &class.summary;
    let mut line = class.name.clone();
    if let Some(c_type) = &summary.c_type {
        line.push_str(&format!(" ({})", c_type));
    }
    line.push_str(&format!(
        ": {} accessor{}, {} sync, {} async",
        summary.accessors,
        if summary.accessors == 1 { "" } else { "s" },
        summary.sync_functions,
        summary.async_functions
    ));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn class_line() -> ClassLine {
        ClassLine {
            name: "Repository".into(),
            summary: ClassSummary {
                c_type: Some("git_repository".into()),
                file_stem: "repository".into(),
                forward_declared: false,
                accessors: 0,
                sync_functions: 2,
                async_functions: 1,
            },
        }
    }

    #[test]
    fn test_written_report() {
        let report = GenerateReport {
            library_header: "git2.h".into(),
            classes: vec![class_line()],
            warnings: Vec::new(),
            errors: Vec::new(),
            result: Some(GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("out"),
                written: vec!["include/repository.h".into()],
                unchanged: vec!["src/repository.cc".into()],
            })),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Library: git2.h",
                "",
                "Classes (1):",
                "  - Repository (git_repository): 0 accessors, 2 sync, 1 async",
                "",
                "Generated: out",
                "  + include/repository.h",
                "  1 unchanged",
            ]
        );
    }

    #[test]
    fn test_preview_report() {
        let report = GenerateReport {
            library_header: "git2.h".into(),
            classes: vec![class_line()],
            warnings: vec!["unused".into()],
            errors: Vec::new(),
            result: Some(GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "include/repository.h".into(),
                    content: "#ifndef REPOSITORY_H".into(),
                }],
            })),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: unused",
                "── include/repository.h ──",
                "#ifndef REPOSITORY_H",
                "── Summary ──",
                "1 files would be generated",
            ]
        );
    }
}
