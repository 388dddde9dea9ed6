use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// dashgrid: dashboard grid layout validation.
#[derive(Parser, Debug)]
#[command(name = "dashgrid", version, about)]
pub struct Args {
    /// Variant registry file override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a grid JSON file with every field writable.
    Validate {
        /// Grid file (`variant`, `page`, `rowCount`, `columnCount`, `widgets`).
        file: PathBuf,
    },

    /// Render the form for posting params to a stored grid.
    Form {
        /// Grid file holding the stored state.
        file: PathBuf,

        /// JSON file with the posted params. Defaults to `{}`.
        #[arg(long)]
        params: Option<PathBuf>,

        /// Allow the page link to be written.
        #[arg(long)]
        page_writable: bool,
    },

    /// Print the default layout of one or every variant.
    Defaults {
        /// Only this variant.
        #[arg(long)]
        variant: Option<String>,
    },

    /// Write the commented default registry file.
    InitConfig {
        /// Target path. Defaults to the platform config directory.
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
