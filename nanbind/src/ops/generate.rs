//! Generate operation - header and source emission from the manifest.

use std::path::Path;

use eyre::{Context, Result};
use nanbind_codegen::{Generator, pipeline::Pipeline};
use nanbind_core::Overwrite;
use nanbind_manifest::Manifest;
use tracing::debug;

use super::describe;
use crate::reports::{
    ClassLine, GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to rewrite files whose content is already current.
    pub force: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the manifest and renders every class. Validation
/// errors end up in the report and nothing is written.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let (ctx, validated) = Pipeline::new().check(manifest.clone());
    let warnings = ctx.warnings().map(describe).collect();
    let mut report = GenerateReport {
        library_header: manifest.library.header.clone(),
        classes: Vec::new(),
        warnings,
        errors: Vec::new(),
        result: None,
    };

    if let Err(err) = validated {
        if !ctx.has_errors() {
            return Err(err.wrap_err("Pipeline failed"));
        }
        report.errors = ctx.errors().map(describe).collect();
        debug!(errors = report.errors.len(), "validation rejected the manifest");
        return Ok(report);
    }

    let computed = ctx.computed()?;
    report.classes = computed
        .classes
        .iter()
        .map(|(name, summary)| ClassLine {
            name: name.clone(),
            summary: summary.clone(),
        })
        .collect();

    let overwrite = if opts.force {
        Overwrite::Always
    } else {
        Overwrite::IfChanged
    };
    let generator = Generator::from_context(&ctx)?.overwrite(overwrite);
    report.result = Some(if opts.dry_run {
        let files = generator
            .preview()?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: generated.written,
            unchanged: generated.unchanged,
        })
    });

    Ok(report)
}

#[cfg(test)]
mod tests {
    use nanbind_manifest::{ArgSpec, ClassSpec, FunctionSpec, NanbindToml, ReturnSpec};
    use tempfile::TempDir;

    use super::*;

    fn manifest() -> Manifest {
        Manifest {
            classes: vec![
                ClassSpec::new("Repository")
                    .c_type("git_repository")
                    .free_function("git_repository_free")
                    .function(
                        FunctionSpec::new("Open")
                            .asynchronous()
                            .calls("git_repository_open")
                            .returns(ReturnSpec::error_code())
                            .arg(ArgSpec::new("out", "git_repository **").returned())
                            .arg(ArgSpec::new("path", "const char *")),
                    ),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let report = generate(
            &manifest(),
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: true,
                force: false,
            },
        )
        .unwrap();

        assert!(report.is_success());
        let Some(GenerationResult::Preview(preview)) = &report.result else {
            panic!("expected a preview");
        };
        let paths: Vec<_> = preview.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["include/repository.h", "src/repository.cc"]);
        assert!(!dir.path().join("include").exists());
    }

    #[test]
    fn test_generate_writes_file_set() {
        let dir = TempDir::new().unwrap();
        let report = generate(
            &manifest(),
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: false,
                force: false,
            },
        )
        .unwrap();

        let Some(GenerationResult::Written(written)) = &report.result else {
            panic!("expected written files");
        };
        assert_eq!(written.written.len(), 2);
        assert_eq!(report.classes[0].summary.async_functions, 1);
        assert!(dir.path().join("src/repository.cc").exists());
    }

    #[test]
    fn test_libgit2_demo() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos/libgit2/nanbind.toml");
        let nanbind_toml = NanbindToml::open(&path).unwrap();
        let dir = TempDir::new().unwrap();

        let report = generate(
            nanbind_toml.manifest(),
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: true,
                force: false,
            },
        )
        .unwrap();

        assert!(report.is_success(), "{:?}", report.errors);
        let names: Vec<_> = report.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["GitOid", "Repository", "Time", "Signature"]);

        let Some(GenerationResult::Preview(preview)) = &report.result else {
            panic!("expected a preview");
        };
        assert_eq!(preview.files.len(), 8);
        assert_eq!(preview.files[0].path, "include/oid.h");

        let repository = &preview.files[3].content;
        assert!(repository.contains("to = GitOdb::New((void *)baton->out);"));
        assert!(!repository.contains("git_repository_free(baton"));
    }

    #[test]
    fn test_validation_errors_stop_generation() {
        let dir = TempDir::new().unwrap();
        let manifest = Manifest {
            classes: vec![ClassSpec::new("Repository").function(FunctionSpec::new("Open"))],
            ..Default::default()
        };

        let report = generate(
            &manifest,
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: false,
                force: false,
            },
        )
        .unwrap();

        assert!(!report.is_success());
        assert!(report.result.is_none());
        assert!(!dir.path().join("include").exists());
    }
}
