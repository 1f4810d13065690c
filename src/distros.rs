//! Distro discovery from `Dockerfile-<distro>` entries.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Prefix marking a directory entry as a distro definition.
pub const DOCKERFILE_PREFIX: &str = "Dockerfile-";

/// A distro identifier: the filename suffix after [`DOCKERFILE_PREFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Distro(String);

impl Distro {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Distro {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Strip the leading [`DOCKERFILE_PREFIX`] from a filename.
///
/// Returns `None` for names that don't start with the prefix. Only the leading
/// occurrence is removed.
pub fn strip_prefix(file_name: &str) -> Option<&str> {
    file_name.strip_prefix(DOCKERFILE_PREFIX)
}

/// List the distros defined in `dir`, in directory listing order.
///
/// Not recursive. Any entry type counts. Duplicates are kept as listed.
/// Names that aren't valid UTF-8 are skipped with a warning.
pub fn list_distros(dir: &Path) -> Result<Vec<Distro>> {
    tracing::debug!(dir = %dir.display(), "scanning for distros");

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list distros directory {}", dir.display()))?;

    let mut distros = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let file_name = entry.file_name();

        let Some(name) = file_name.to_str() else {
            tracing::warn!(entry = ?file_name, "skipping non-UTF-8 entry name");
            continue;
        };

        match strip_prefix(name) {
            Some(distro) => distros.push(Distro::new(distro)),
            None => tracing::trace!(entry = name, "not a Dockerfile, skipping"),
        }
    }

    tracing::debug!(count = distros.len(), "distros found");
    Ok(distros)
}
