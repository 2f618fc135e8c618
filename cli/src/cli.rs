use blcore::FieldKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "buildlens", version, about = "Inspect embedded build metadata")]
pub struct CliArgs {
    #[arg(long)]
    pub print_config: bool,
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the metadata of a manifest, or of this binary when none is given
    Show {
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Print only this field (Company, Title, InformationalVersion, ...)
        #[arg(long)]
        field: Option<FieldKind>,
        #[arg(long)]
        json: bool,
    },
    /// Split an informational version into version and commit hash
    Normalize {
        raw: Option<String>,
        /// Cut the version with the legacy `len - idx - 2` rule
        #[arg(long)]
        legacy: bool,
        #[arg(long)]
        json: bool,
    },
    /// List types carrying a marker
    Types {
        #[arg(long)]
        marker: String,
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Print build & version metadata
    Version {
        #[arg(long)]
        json: bool,
    },
}

impl Default for CliCommand {
    fn default() -> Self {
        CliCommand::Show {
            manifest: None,
            field: None,
            json: false,
        }
    }
}
