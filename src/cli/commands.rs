//! CLI command definitions and argument parsing

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "snapthread")]
#[command(about = "Cast thread statistics - groups casts into threads and rolls up engagement")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a config file (default: config.toml, then config.example.toml)
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate an author's casts into threads and print per-thread stats
    Threads {
        /// Author FID (falls back to hub.default_fid from config)
        #[arg(long)]
        fid: Option<u64>,
        /// Emit the summary list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the raw cast page the hub returns for an author
    Casts {
        /// Author FID (falls back to hub.default_fid from config)
        #[arg(long)]
        fid: Option<u64>,
        /// Maximum number of casts to print
        #[arg(short, long, default_value = "25")]
        limit: usize,
    },
}
