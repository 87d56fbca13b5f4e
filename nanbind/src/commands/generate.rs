use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::ManifestArg;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub manifest: ManifestArg,

    /// Base directory for generated files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Print the generated files instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Rewrite files even when their content is unchanged
    #[arg(long)]
    pub force: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let nanbind_toml = self.manifest.open();
        let report = ops::generate(
            nanbind_toml.manifest(),
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                force: self.force,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
