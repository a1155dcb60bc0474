use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Collection;

/// A single catalog resource (an event, a service, a team member, a custom doc page...).
///
/// Only the backing file is consumed by the export. Records without one are
/// still part of the resource set and contribute an empty entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentRecord {
    /// Path relative to the catalog root, `/`-separated.
    pub id: String,
    pub collection: Collection,
    /// Source file on disk, if the resource has one.
    pub file_path: Option<PathBuf>,
}

impl ContentRecord {
    pub fn new(
        id: impl Into<String>,
        collection: Collection,
        file_path: impl Into<Option<PathBuf>>,
    ) -> Self {
        Self {
            id: id.into(),
            collection,
            file_path: file_path.into(),
        }
    }

    /// A record with no backing file.
    pub fn without_file(id: impl Into<String>, collection: Collection) -> Self {
        Self {
            id: id.into(),
            collection,
            file_path: None,
        }
    }
}
