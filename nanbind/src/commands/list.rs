use clap::Args;
use eyre::Result;

use super::ManifestArg;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub manifest: ManifestArg,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let nanbind_toml = self.manifest.open();
        ops::list(nanbind_toml.manifest()).render(&mut TerminalOutput::new());
        Ok(())
    }
}
