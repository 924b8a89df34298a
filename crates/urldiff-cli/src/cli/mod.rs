//! CLI for urldiff.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use urldiff_core::config::{self, OutputFormat, UrlDiffConfig};

use commands::{run_compare, run_completions, run_interactive, run_man, run_segments};

/// Top-level CLI for urldiff.
#[derive(Debug, Parser)]
#[command(name = "urldiff", version)]
#[command(about = "urldiff: compare two URLs field by field", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output format override for `compare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compare two URLs and print protocol, host, pathname and query parameter rows.
    Compare {
        /// Current URL.
        url1: String,
        /// Candidate URL.
        url2: String,
        /// Output format (defaults to `output` from config.toml).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Print a URL split on `&`, one segment per line.
    Segments {
        /// URL to split.
        url: String,
    },

    /// Read candidate URLs from stdin and compare each against the current URL.
    Interactive {
        /// Starting URL (defaults to `initial_url` from config.toml).
        #[arg(long)]
        current: Option<String>,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a roff man page on stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Compare { url1, url2, format } => {
                let cfg = load_config()?;
                let format = format.map(OutputFormat::from).unwrap_or(cfg.output);
                run_compare(&url1, &url2, format, &cfg)?;
            }
            CliCommand::Segments { url } => run_segments(&url)?,
            CliCommand::Interactive { current } => {
                let cfg = load_config()?;
                let start = current.unwrap_or_else(|| cfg.initial_url.clone());
                run_interactive(&start, &cfg)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

fn load_config() -> Result<UrlDiffConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
