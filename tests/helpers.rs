//! Shared test utilities for get-distros tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use get_distros::config::{Config, DEFAULT_DISTROS_DIR};

/// Test environment with a temporary build tree.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Base directory (project root simulation)
    pub base_dir: PathBuf,
    /// `tools/build/linux` under the base directory
    pub distros_dir: PathBuf,
}

impl TestEnv {
    /// Create a new test environment with an empty distros directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let distros_dir = base_dir.join(DEFAULT_DISTROS_DIR);

        fs::create_dir_all(&distros_dir).expect("Failed to create distros dir");

        Self {
            _temp_dir: temp_dir,
            base_dir,
            distros_dir,
        }
    }

    /// Create a test environment holding the given entries.
    pub fn with_entries(names: &[&str]) -> Self {
        let env = Self::new();
        for name in names {
            env.add_entry(name);
        }
        env
    }

    /// Add a file entry to the distros directory.
    pub fn add_entry(&self, name: &str) {
        fs::write(self.distros_dir.join(name), "FROM scratch\n")
            .expect("Failed to create entry");
    }

    /// Config pointing at this environment, independent of the process env.
    pub fn config(&self) -> Config {
        Config::from_vars(&self.base_dir, Vec::<(String, String)>::new())
    }
}

/// Run the print command against `env` and return its stdout.
pub fn run_print(env: &TestEnv, selection: &str) -> String {
    let mut buf = Vec::new();
    get_distros::commands::cmd_print(&env.config(), selection, &mut buf)
        .expect("print should succeed");
    String::from_utf8(buf).expect("output should be UTF-8")
}

/// Parse a printed JSON line into distro names.
pub fn parse_output(output: &str) -> Vec<String> {
    assert!(output.ends_with('\n'), "output must end with a newline");
    assert_eq!(output.lines().count(), 1, "output must be a single line");
    serde_json::from_str(output.trim_end()).expect("output should be a JSON string array")
}
