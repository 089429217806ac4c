//! # CLI Argument Definitions

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "packhub")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect PackHub navigation and feature flags, and stamp pallet codes")]
pub(crate) struct Cli {
    /// Configuration file (defaults to `packhub.toml` in the working directory, if present)
    #[arg(long, short, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List the routes composed under the configured flags
    Routes {
        /// Print the navigation as JSON, the way the shell consumes it
        #[arg(long)]
        json: bool,
    },
    /// Print navigation sections with breadcrumbs
    Nav,
    /// Print the resolved feature flags
    Flags,
    /// Validate every registered route table
    Check,
    /// Encode a pallet code
    #[command(alias = "code")]
    PalletCode {
        /// Calendar date (YYYY-MM-DD), today by default
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        shift: String,
        #[arg(long)]
        caliber: String,
        /// Packaging format id
        #[arg(long = "format")]
        format_id: String,
        #[arg(long)]
        company: String,
    },
}
