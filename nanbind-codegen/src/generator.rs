//! Turns a resolved manifest into the `.h`/`.cc` file set.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use nanbind_core::{GeneratedFile, Overwrite, WriteResult};
use nanbind_ir::{ClassSpec, NativeLibrary};
use nanbind_manifest::{Manifest, OutputConfig};
use tracing::{debug, info};

use crate::{
    naming::{file_stem, header_include},
    pipeline::CompilationContext,
    render::{ClassRegistry, DeclarationRenderer, ImplementationRenderer},
};

/// A generated file for preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from the output directory
    pub path: String,
    pub content: String,
}

/// Result of writing the file set.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content changed, relative to the output directory
    pub written: Vec<String>,
    /// Files that already had the rendered content
    pub unchanged: Vec<String>,
}

impl GenerateResult {
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// One rendered output file.
struct OutputFile {
    relative: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl GeneratedFile for OutputFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.relative)
    }

    fn overwrite(&self) -> Overwrite {
        self.overwrite
    }

    fn render(&self) -> Result<String> {
        Ok(self.content.clone())
    }
}

/// Generator producing one header and one implementation file per class.
pub struct Generator<'a> {
    library: &'a NativeLibrary,
    output: &'a OutputConfig,
    classes: &'a [ClassSpec],
    registry: ClassRegistry,
    overwrite: Overwrite,
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self {
            library: &manifest.library,
            output: &manifest.output,
            classes: &manifest.classes,
            registry: ClassRegistry::new(&manifest.classes),
            overwrite: Overwrite::default(),
        }
    }

    /// Reuse the registry computed by the pipeline.
    pub fn from_context(ctx: &'a CompilationContext) -> Result<Self> {
        let computed = ctx.computed()?;
        Ok(Self {
            library: &ctx.manifest.library,
            output: &ctx.manifest.output,
            classes: &ctx.manifest.classes,
            registry: computed.registry.clone(),
            overwrite: Overwrite::default(),
        })
    }

    /// How files already present in the output directory are treated.
    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Render every file without touching the disk.
    ///
    /// Fails on the first class that cannot be rendered.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self
            .render_all()?
            .into_iter()
            .map(|file| PreviewFile {
                path: file.relative.display().to_string(),
                content: file.content,
            })
            .collect())
    }

    /// Render every file, then write them under `output_dir`.
    ///
    /// Nothing is written unless every class renders.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let files = self.render_all()?;
        let mut result = GenerateResult::default();

        for file in &files {
            let relative = file.relative.display().to_string();
            let written = file
                .write(output_dir)
                .wrap_err_with(|| format!("failed to write {}", relative))?;
            match written {
                WriteResult::Written => result.written.push(relative),
                WriteResult::Unchanged => result.unchanged.push(relative),
            }
        }

        info!(
            written = result.written.len(),
            unchanged = result.unchanged.len(),
            "generated bindings"
        );
        Ok(result)
    }

    fn render_all(&self) -> Result<Vec<OutputFile>> {
        let declarations = DeclarationRenderer::new(self.library);
        let mut files = Vec::with_capacity(self.classes.len() * 2);

        for class in self.classes {
            let stem = file_stem(class);
            let implementations = ImplementationRenderer::new(self.library, &self.registry)
                .header_include(header_include(
                    &self.output.source_dir,
                    &self.output.include_dir,
                    &stem,
                ));

            let header = declarations
                .render(class)
                .wrap_err_with(|| format!("failed to render {}.h", stem))?;
            let source = implementations
                .render(class)
                .wrap_err_with(|| format!("failed to render {}.cc", stem))?;

            debug!(class = %class.cpp_class_name, stem = %stem, "rendered class");
            files.push(OutputFile {
                relative: self.output.include_dir.join(format!("{}.h", stem)),
                content: header,
                overwrite: self.overwrite,
            });
            files.push(OutputFile {
                relative: self.output.source_dir.join(format!("{}.cc", stem)),
                content: source,
                overwrite: self.overwrite,
            });
        }

        Ok(files)
    }
}
