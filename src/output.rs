//! JSON output of the distro list.

use anyhow::{Context, Result};
use std::io::Write;

use crate::distros::Distro;

/// Write `distros` as a compact JSON array followed by a newline.
pub fn write_json<W: Write>(out: &mut W, distros: &[Distro]) -> Result<()> {
    serde_json::to_writer(&mut *out, distros).context("Failed to write distro list")?;
    writeln!(out).context("Failed to write distro list")?;
    Ok(())
}
