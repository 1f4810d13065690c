//! get-distros library exports.
//!
//! The binary is a thin wrapper; everything it does is reachable from here so
//! integration tests can drive it against a temporary directory.

pub mod commands;
pub mod config;
pub mod distros;
pub mod filter;
pub mod logging;
pub mod output;

pub use distros::{list_distros, Distro, DOCKERFILE_PREFIX};
pub use filter::{filter_distros, Selection};
pub use output::write_json;
