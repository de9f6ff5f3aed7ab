//! CLI argument definitions for nexo-furnace

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nexo-furnace")]
#[command(about = "Build a furnace armor mapping from a Nexo resource pack")]
#[command(version)]
pub struct Args {
    /// TOML file overriding the default path layout
    /// (default: <root>/nexo-furnace.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base directory for every relative layout path
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Reuse an already extracted pack instead of unpacking the archive
    #[arg(long)]
    pub skip_extract: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
