use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Avro schema workbench: validate, format, and navigate .avsc documents.
#[derive(Parser)]
#[command(
    name = "avrodraft",
    version,
    about = "Validate, format, and navigate Avro schema documents",
    after_help = "Use 'avrodraft <command> --help' for more information about a command.",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all subcommands.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Output format: human (default), json, plain
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse and validate .avsc schema files
    Check(CheckArgs),

    /// Rewrite schema files in canonical formatting
    Format(FormatArgs),

    /// Map a cursor position to a schema node, or a node to its text range
    Locate(LocateArgs),
}

/// Arguments for `avrodraft check`.
#[derive(Args)]
pub struct CheckArgs {
    /// Schema files or directories (directories are searched for **/*.avsc)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Arguments for `avrodraft format`.
#[derive(Args)]
pub struct FormatArgs {
    /// Schema files or directories to format
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Rewrite files in place instead of printing to stdout
    #[arg(short = 'w', long = "write")]
    pub write: bool,

    /// Exit non-zero if any file is not already canonical
    #[arg(long, conflicts_with = "write")]
    pub check: bool,
}

/// Arguments for `avrodraft locate`.
#[derive(Args)]
pub struct LocateArgs {
    /// Schema file to query
    pub file: PathBuf,

    /// Cursor line (1-based); resolves the position to a node path
    #[arg(long, requires = "column")]
    pub line: Option<u32>,

    /// Cursor column (1-based)
    #[arg(long, requires = "line")]
    pub column: Option<u32>,

    /// Node path (JSON Pointer); resolves the path to its text range
    #[arg(long, conflicts_with_all = ["line", "column"])]
    pub path: Option<String>,
}
