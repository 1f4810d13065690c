//! CLI command handlers.
//!
//! - `print` - List, filter and print distros as JSON

pub mod print;

pub use print::cmd_print;
