//! Selection of a subset of the discovered distros.

use std::collections::HashSet;

use crate::distros::Distro;

/// Selection argument value meaning "every distro".
pub const ALL: &str = "all";

/// Parsed form of the `distros` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Keep the full list.
    All,
    /// Keep only these names (trimmed, in argument order).
    Only(Vec<String>),
}

impl Selection {
    /// Parse a comma-separated selection.
    ///
    /// `all` (exact) and the empty string select everything. Anything else is
    /// split on commas with each token trimmed. Empty tokens are kept as `""`.
    pub fn parse(arg: &str) -> Self {
        if arg == ALL || arg.is_empty() {
            return Selection::All;
        }
        Selection::Only(arg.split(',').map(|t| t.trim().to_string()).collect())
    }

    /// Apply the selection, keeping the order of `distros`.
    ///
    /// Unknown names are dropped silently.
    pub fn apply(&self, distros: Vec<Distro>) -> Vec<Distro> {
        match self {
            Selection::All => distros,
            Selection::Only(tokens) => {
                let wanted: HashSet<&str> = tokens.iter().map(String::as_str).collect();
                distros
                    .into_iter()
                    .filter(|d| wanted.contains(d.as_str()))
                    .collect()
            }
        }
    }
}

/// Filter `distros` by a raw selection argument.
pub fn filter_distros(distros: Vec<Distro>, arg: &str) -> Vec<Distro> {
    let selection = Selection::parse(arg);
    tracing::debug!(?selection, "applying selection");
    selection.apply(distros)
}
