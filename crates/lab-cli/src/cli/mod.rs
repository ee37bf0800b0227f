use clap::{Parser, ValueEnum};
use lab_config::LabConfig;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `lab` binary.
#[derive(Debug, Parser)]
#[command(name = "lab", version, about = "ormlab - ORM exercises on an embedded database")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file (overrides `database.path`)
    #[arg(short, long, global = true)]
    pub database: Option<String>,
}

impl Cli {
    /// Resolve the global flags, filling gaps from configuration.
    #[must_use]
    pub fn global_flags(&self, config: &LabConfig) -> GlobalFlags {
        let format = self.format.unwrap_or_else(|| {
            OutputFormat::from_str(&config.general.default_format, true)
                .unwrap_or(OutputFormat::Table)
        });
        GlobalFlags {
            format,
            limit: self.limit,
            default_limit: config.general.default_limit,
            quiet: self.quiet,
            database: self.database.clone(),
        }
    }
}
