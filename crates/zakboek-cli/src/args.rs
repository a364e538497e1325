use crate::types::{BagTypeArg, OutputFormat};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "zakboek")]
#[command(about = "Deposit bag ledger: register bags, count CHR statements", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory; defaults to $ZAKBOEK_PATH or the platform data dir
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Workbook file; overrides the configured path
    #[arg(long, global = true)]
    pub workbook: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory, a default config and an empty workbook
    Init,

    /// Count CHR statement files into the workbook
    Process {
        /// A statement file, or a directory scanned for .chr files
        path: PathBuf,
    },

    /// Register handed-in bags ahead of their statement
    Register {
        /// Scanned codes; read from stdin when piped in and absent here
        codes: Vec<String>,

        /// Where the bags were handed in; defaults to the sole configured source
        #[arg(long)]
        source: Option<String>,

        #[arg(long = "type", default_value = "mini")]
        bag_type: BagTypeArg,

        /// Hand-in date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Inspect the workbook
    Ledger {
        #[command(subcommand)]
        command: LedgerCommand,
    },
}

#[derive(Subcommand)]
pub enum LedgerCommand {
    /// List workbook rows
    List {
        /// Only rows still waiting for their statement
        #[arg(long, conflicts_with = "processed")]
        pending: bool,

        /// Only rows a statement already counted
        #[arg(long)]
        processed: bool,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// Workbook totals at a glance
    Status,
}
