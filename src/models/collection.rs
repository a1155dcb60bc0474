use serde::{Deserialize, Serialize};

/// The category a catalog resource belongs to.
///
/// Variants are declared in export order: every resource of an earlier
/// collection is written before any resource of a later one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    Events,
    Commands,
    Queries,
    Services,
    Domains,
    Teams,
    Users,
    CustomPages,
}

impl Collection {
    /// Collections that are always exported, in export order.
    pub const BASE: [Collection; 7] = [
        Self::Events,
        Self::Commands,
        Self::Queries,
        Self::Services,
        Self::Domains,
        Self::Teams,
        Self::Users,
    ];

    /// Every collection, custom pages last.
    pub const ALL: [Collection; 8] = [
        Self::Events,
        Self::Commands,
        Self::Queries,
        Self::Services,
        Self::Domains,
        Self::Teams,
        Self::Users,
        Self::CustomPages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Commands => "commands",
            Self::Queries => "queries",
            Self::Services => "services",
            Self::Domains => "domains",
            Self::Teams => "teams",
            Self::Users => "users",
            Self::CustomPages => "customPages",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "events" => Some(Self::Events),
            "commands" => Some(Self::Commands),
            "queries" => Some(Self::Queries),
            "services" => Some(Self::Services),
            "domains" => Some(Self::Domains),
            "teams" => Some(Self::Teams),
            "users" => Some(Self::Users),
            "customPages" => Some(Self::CustomPages),
            _ => None,
        }
    }

    /// Name of the directory holding this collection inside a catalog.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::CustomPages => "docs",
            other => other.as_str(),
        }
    }

    /// Collections discovered through nested `index.md(x)` resource folders
    /// rather than flat files at the catalog root.
    pub fn is_nested(&self) -> bool {
        matches!(
            self,
            Self::Events | Self::Commands | Self::Queries | Self::Services | Self::Domains
        )
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
