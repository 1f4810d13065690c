//! Configuration management for get-distros.
//!
//! Reads configuration from environment variables. `main` loads `.env` into the
//! environment first, and variables already set take precedence over it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Directory holding the `Dockerfile-<distro>` definitions, relative to the base directory.
pub const DEFAULT_DISTROS_DIR: &str = "tools/build/linux";

/// Environment variable overriding [`DEFAULT_DISTROS_DIR`].
pub const DISTROS_DIR_VAR: &str = "DISTROS_DIR";

/// get-distros configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned for Dockerfiles (default: tools/build/linux)
    pub distros_dir: PathBuf,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load(base_dir: &Path) -> Self {
        Self::from_vars(base_dir, std::env::vars())
    }

    /// Resolve configuration from an explicit set of variables.
    ///
    /// Relative paths are resolved against `base_dir`.
    pub fn from_vars<I>(base_dir: &Path, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env_vars: HashMap<String, String> = vars.into_iter().collect();

        let distros_dir = env_vars
            .get(DISTROS_DIR_VAR)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                let path = PathBuf::from(s);
                if path.is_absolute() {
                    path
                } else {
                    base_dir.join(path)
                }
            })
            .unwrap_or_else(|| base_dir.join(DEFAULT_DISTROS_DIR));

        Self { distros_dir }
    }

    /// Check if the distros directory is present.
    pub fn has_distros_dir(&self) -> bool {
        self.distros_dir.is_dir()
    }

    /// Print configuration for debugging.
    ///
    /// Goes to stderr; stdout carries only the JSON list.
    pub fn print(&self) {
        eprintln!("Configuration:");
        eprintln!("  {}: {}", DISTROS_DIR_VAR, self.distros_dir.display());
        if self.has_distros_dir() {
            eprintln!("  Distros directory: FOUND");
        } else {
            eprintln!("  Distros directory: NOT FOUND");
        }
    }
}
