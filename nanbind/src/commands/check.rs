use clap::Args;
use eyre::Result;

use super::ManifestArg;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub manifest: ManifestArg,

    /// List the lints check runs instead of checking
    #[arg(long)]
    pub lints: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let mut out = TerminalOutput::new();
        if self.lints {
            ops::lints().render(&mut out);
            return Ok(());
        }

        let nanbind_toml = self.manifest.open();
        let report = ops::check(nanbind_toml.manifest(), nanbind_toml.path())?;
        report.render(&mut out);

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
