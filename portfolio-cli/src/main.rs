//! # portfolio
//!
//! Command-line front end for `portfolio-site`: renders the portfolio page
//! to a directory, prints it or its outline, and audits its links.
//!
//! ## Usage
//!
//! ```bash
//! portfolio build --out dist
//! portfolio render --section projects
//! portfolio outline --pretty
//! portfolio check --strict
//! portfolio sections
//! ```

mod commands;
mod config;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_site::sections::PageSection;
use tracing::info;

use commands::BuildOptions;
use config::PortfolioConfig;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(about = "Build, inspect and check the single-page portfolio")]
#[command(version)]
struct Cli {
    /// Config file (default: ./portfolio.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page and write it to the output directory
    Build {
        /// Output directory (default: [build].out_dir, "dist")
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Write into an existing non-empty directory
        #[arg(long)]
        force: bool,

        /// Also write outline.json
        #[arg(long)]
        outline: bool,
    },

    /// Print the rendered page (or one section) to stdout
    Render {
        /// Section to render: header, hero, about, projects, footer
        #[arg(short, long)]
        section: Option<PageSection>,
    },

    /// Print the page outline as JSON
    Outline {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Audit in-page anchors and new-context links
    Check {
        /// Treat configured external anchors as broken
        #[arg(long)]
        strict: bool,
    },

    /// List sections in render order
    Sections,
}

// ============================================================================
// Entry point
// ============================================================================

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = PortfolioConfig::resolve(cli.config.as_deref(), &cwd)?;

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Build {
            out,
            force,
            outline,
        } => {
            let opts = BuildOptions {
                out_dir: out,
                force,
                outline,
            };
            for path in commands::build(&config, &opts)? {
                writeln!(stdout, "wrote {}", path.display())?;
            }
        }
        Command::Render { section } => {
            let html = commands::render(&config, section);
            writeln!(stdout, "{}", html)?;
        }
        Command::Outline { pretty } => {
            writeln!(stdout, "{}", commands::outline(pretty)?)?;
        }
        Command::Check { strict } => {
            let audit = commands::check(&config, strict);
            let color = console::colors_enabled();
            write!(stdout, "{}", commands::format_audit(&audit, color))?;
            stdout.flush()?;
            audit.ensure_clean()?;
        }
        Command::Sections => {
            write!(stdout, "{}", commands::sections())?;
        }
    }

    Ok(())
}

/// A reader that closed early (`portfolio render | head`) is not an error.
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

fn main() -> ExitCode {
    // Die quietly on a closed pipe like other filters do
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[portfolio] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_pipe_anywhere_in_chain_is_detected() {
        let err = anyhow::Error::new(io::Error::from(io::ErrorKind::BrokenPipe))
            .context("Failed to write page");
        assert!(is_broken_pipe(&err));
    }

    #[test]
    fn other_io_errors_are_not_broken_pipe() {
        let err = anyhow::Error::new(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!is_broken_pipe(&err));
        assert!(!is_broken_pipe(&anyhow::anyhow!("link audit failed")));
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["portfolio", "check", "--strict", "--log-level", "debug"])
            .expect("parse");
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Command::Check { strict: true }));
    }
}
