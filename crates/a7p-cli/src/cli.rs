use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "a7p",
    about = "Manage A7P ballistic profile files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the `.a7p` files
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

impl Cli {
    pub fn profiles_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the profile directory over HTTP
    Serve(ServeArgs),
    /// List profile files
    List,
    /// Print a profile as JSON
    Show(NameArgs),
    /// Store a profile from JSON
    Put(PutArgs),
    /// Delete a profile file
    Delete(NameArgs),
    /// Check the checksum and encoding of every profile file
    Verify,
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Serve files from this directory on paths outside the API
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
    /// TOML server configuration; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct NameArgs {
    pub name: String,
}

#[derive(Args)]
pub struct PutArgs {
    pub name: String,
    /// Read JSON from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
