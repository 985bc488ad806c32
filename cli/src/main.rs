//! `wfar` - command-line driver for the MITM-WFAR certificate verifier.
//!
//! Loads certificates from JSON, runs [`wfar_core::verify`] on each, and
//! exits non-zero if any certificate fails. With `--explain`, the first
//! failing check is printed under each invalid certificate.

mod config;
mod diagnose;
mod load;
mod render;

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use config::WfarConfig;
use diagnose::diagnose;
use load::{load_certificate, within_limit};
use wfar_types::Machine;

#[derive(Parser)]
#[command(name = "wfar")]
#[command(about = "Check MITM-WFAR non-halting certificates")]
struct Cli {
    /// Config file (default: ~/.wfar/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify certificate files (exit 1 if any is invalid)
    Verify {
        /// Certificate JSON files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print the first failing check for invalid certificates
        #[arg(long)]
        explain: bool,
    },
    /// Print the transition table of a machine in `1RB1LB_1LA---` notation
    Machine {
        /// Machine text
        text: String,
    },
}

fn init_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries verdicts; logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = WfarConfig::load(cli.config.as_deref())?.unwrap_or_default();
    init_tracing(config.log_level());

    match cli.command {
        Commands::Verify { files, explain } => verify_files(&files, explain, &config),
        Commands::Machine { text } => {
            let machine = Machine::parse_standard(&text)
                .with_context(|| format!("invalid machine text {text:?}"))?;
            println!("{}", render::render_table(&machine));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn verify_files(files: &[PathBuf], explain: bool, config: &WfarConfig) -> Result<ExitCode> {
    let mut all_valid = true;
    for path in files {
        all_valid &= verify_file(path, explain, config)?;
    }
    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn verify_file(path: &Path, explain: bool, config: &WfarConfig) -> Result<bool> {
    let cert = load_certificate(path)?;

    if !within_limit(&cert, config.max_accept_entries()) {
        tracing::warn!(
            path = %path.display(),
            entries = cert.accept.len(),
            "acceptance table exceeds configured limit, not verified"
        );
        println!("{}: skipped (acceptance table too large)", path.display());
        return Ok(false);
    }

    let valid = wfar_core::verify(&cert);
    tracing::info!(path = %path.display(), valid, "certificate checked");

    if valid {
        println!("{}: valid", path.display());
    } else {
        println!("{}: invalid", path.display());
        if explain && let Err(rejection) = diagnose(&cert) {
            println!("  {rejection}");
        }
    }
    Ok(valid)
}
