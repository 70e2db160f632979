use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_OUT_DIR: &str = ".";

#[derive(Parser, Debug)]
#[command(
    name = "mcp-npm-kit",
    version,
    about = "Scaffold an npm package that installs and launches a Python MCP server"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_OUT_DIR,
        help = "Directory the package files are written to"
    )]
    pub out_dir: PathBuf,
    #[arg(
        long,
        global = true,
        help = "TOML package profile overriding the built-in defaults"
    )]
    pub profile: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Log debug detail to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write package.json, server.js, install.js and README.md (default)
    Generate,
    /// Print the effective package profile
    Profile,
    /// Print the .cursor/mcp.json client snippet
    McpConfig {
        #[arg(long, help = "Base URL of a remotely deployed HTTP server")]
        url: Option<String>,
    },
}
