use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "p3r4",
    version,
    about = "Chat with the P3R4 personal research agent from the terminal"
)]
pub struct Cli {
    /// Base URL of the answer service (overrides config and P3R4_BACKEND_URL)
    #[arg(long)]
    pub backend_url: Option<String>,
    /// Path to client.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Write logs to this file; the TUI logs nothing otherwise
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Tui)]
    pub mode: RunMode,
    /// Query for `--mode ask`; read from stdin when omitted
    #[arg()]
    pub query: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Full-screen chat
    Tui,
    /// Ask one question and print the answer
    Ask,
}
