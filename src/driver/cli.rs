//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// LogFrameのドラフト・確認・改善を対話的に行うCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "lfd")]
#[command(about = "Draft, clarify and refine a LogFrame against a drafting engine", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "~/.config/lfd/config.json")]
    pub config: String,

    /// Drafting engine base address (overrides LFD_API_BASE and the config file)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Initial problem statement
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the initial problem statement from a file
    #[arg(short, long)]
    pub input: Option<String>,

    /// Generate the first draft immediately
    #[arg(short, long)]
    pub generate: bool,
}
