//! get-distros - print the Linux distros of the build tree as JSON.
//!
//! Scans `tools/build/linux` for `Dockerfile-<distro>` entries and prints the
//! distro names as a single-line JSON array, e.g. for a CI build matrix.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use get_distros::commands;
use get_distros::config::Config;
use get_distros::logging;

#[derive(Parser)]
#[command(name = "get-distros")]
#[command(version, about = "Print distros as JSON.")]
#[command(
    after_help = "EXAMPLES:\n  get-distros                  All distros\n  get-distros debian,alpine    Only these (in directory order)\n\nSet DISTROS_DIR to scan a different directory."
)]
struct Cli {
    /// Comma-separated list of distros. Default is "all" to use all distros.
    #[arg(default_value = "all")]
    distros: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();
    logging::init_logging();

    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load(&base_dir);
    if tracing::enabled!(tracing::Level::DEBUG) {
        config.print();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::cmd_print(&config, &cli.distros, &mut out)?;
    out.flush()?;

    Ok(())
}
