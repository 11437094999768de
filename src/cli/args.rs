use clap::Parser;
use std::path::PathBuf;

/// Argument surface for the driver.
///
/// clap's generated help is disabled; `run_with_cli` renders the fixed
/// help screen instead.
#[derive(Parser, Debug)]
#[command(name = "hash-test")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Print this screen
    #[arg(long)]
    pub help: bool,

    /// Print the list of supported hash functions
    #[arg(long)]
    pub hashes: bool,

    /// Print tool metadata as JSON
    #[arg(long, hide = true)]
    pub describe: bool,

    /// Input file to read lines from
    pub input: Option<PathBuf>,

    /// Name of the hash function to run each line through
    pub hash_name: Option<String>,
}
