// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::default_curriculum_path;

/// Command-line arguments for `ramos`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ramos",
    version,
    about = "Track completed courses in a curriculum with prerequisite gating.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the curriculum file (TOML).
    #[arg(long, value_name = "PATH", default_value_os_t = default_curriculum_path())]
    pub curriculum: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RAMOS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Keep progress in memory only, ignoring `[storage].mode`.
    #[arg(long)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show every course with its state (default).
    Show,
    /// Click one or more courses, in order.
    Click {
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },
    /// Forget all completed courses.
    Reset,
    /// Parse + validate the curriculum and print it; touches no storage.
    Check,
    /// Read course ids from stdin, one per line, and click each.
    ///
    /// `show`, `reset`, `quit` and `exit` are also understood.
    Session,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
