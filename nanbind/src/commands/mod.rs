mod check;
mod generate;
mod list;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;
use nanbind_manifest::NanbindToml;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for nanbind_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// The manifest a subcommand works on.
#[derive(Args)]
pub struct ManifestArg {
    /// Path to nanbind.toml
    #[arg(short = 'c', long = "config", default_value = "nanbind.toml")]
    pub path: PathBuf,
}

impl ManifestArg {
    /// Load the manifest and its descriptors, or report and exit.
    fn open(&self) -> NanbindToml {
        NanbindToml::open(&self.path).unwrap_or_exit()
    }
}

#[derive(Parser)]
#[command(name = "nanbind")]
#[command(version)]
#[command(about = "Generate NAN wrapper classes for C libraries")]
pub(crate) struct Cli {
    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate wrapper headers and sources from nanbind.toml
    Generate(GenerateCommand),

    /// Validate nanbind.toml without generating code
    Check(CheckCommand),

    /// List the classes and bindings defined in nanbind.toml
    List(ListCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "nanbind", "-vv", "generate", "-c", "lib.toml", "-o", "out", "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.manifest.path.to_str(), Some("lib.toml"));
        assert_eq!(cmd.output.to_str(), Some("out"));
        assert!(cmd.dry_run);
    }

    #[test]
    fn test_config_defaults_to_nanbind_toml() {
        let cli = Cli::try_parse_from(["nanbind", "check"]).unwrap();
        let Commands::Check(cmd) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(cmd.manifest.path.to_str(), Some("nanbind.toml"));
        assert!(!cmd.lints);
    }

    #[test]
    fn test_parse_check_lints() {
        let cli = Cli::try_parse_from(["nanbind", "check", "--lints"]).unwrap();
        let Commands::Check(cmd) = cli.command else {
            panic!("expected check");
        };
        assert!(cmd.lints);
    }
}
