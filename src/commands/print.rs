//! Print command - lists, filters and prints distros.

use anyhow::Result;
use std::io::Write;

use crate::config::Config;
use crate::distros::list_distros;
use crate::filter::filter_distros;
use crate::output::write_json;

/// Execute the print command.
///
/// `selection` is the raw `distros` argument (`all`, empty, or a
/// comma-separated list). Nothing is written if listing fails.
pub fn cmd_print<W: Write>(config: &Config, selection: &str, out: &mut W) -> Result<()> {
    let distros = list_distros(&config.distros_dir)?;
    let distros = filter_distros(distros, selection);
    write_json(out, &distros)
}
