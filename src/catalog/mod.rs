//! Loads a catalog directory into a [`Catalog`] snapshot.
//!
//! # Layout
//!
//! ```text
//! catalog/
//!   events/OrderPlaced/index.mdx
//!   events/OrderPlaced/versioned/0.0.1/index.mdx
//!   domains/Orders/index.mdx
//!   domains/Orders/services/Inventory/index.mdx
//!   domains/Orders/services/Inventory/commands/ReserveStock/index.mdx
//!   teams/platform.mdx
//!   users/alice.md
//!   docs/getting-started/intro.mdx
//! ```
//!
//! Resource folders (`events`, `commands`, `queries`, `services`, `domains`) may
//! nest inside each other. A resource's collection is decided by the closest
//! enclosing collection folder above its own folder. Teams and users are flat
//! files, and every markdown file under `docs/` is a custom page.

use std::path::{Component, Path};

use walkdir::{DirEntry, WalkDir};

use crate::error::{CatalogError, Result};
use crate::models::{Catalog, Collection, ContentRecord};

const SKIPPED_DIRS: &[&str] = &["node_modules", "dist"];

/// Walk `root` and collect every resource, sorted by path within each collection.
pub fn load(root: &Path) -> Result<Catalog> {
    if !root.is_dir() {
        return Err(CatalogError::RootNotFound(root.to_path_buf()));
    }

    let mut records = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.loop_ancestor().is_some() => {
                tracing::warn!("Skipping symlink loop: {}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let components: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        if let Some(collection) = classify(&components) {
            records.push(ContentRecord::new(
                components.join("/"),
                collection,
                entry.path().to_path_buf(),
            ));
        }
    }

    records.sort_by(|a, b| (a.collection, &a.id).cmp(&(b.collection, &b.id)));
    let catalog = Catalog::from_records(records);

    for collection in Collection::ALL {
        tracing::debug!(
            "{}: {} resources",
            collection,
            catalog.collection(collection).len()
        );
    }
    tracing::info!(
        "Loaded {} resources from {}",
        catalog.len(),
        root.display()
    );

    Ok(catalog)
}

/// Decide which collection a file belongs to from its path components
/// relative to the catalog root (the last component is the file name).
pub fn classify(components: &[String]) -> Option<Collection> {
    let (file_name, dirs) = components.split_last()?;
    let top = dirs.first()?;

    if top == Collection::CustomPages.dir_name() {
        return Some(Collection::CustomPages);
    }

    for flat in [Collection::Teams, Collection::Users] {
        if top == flat.dir_name() {
            return (dirs.len() == 1).then_some(flat);
        }
    }

    if !is_index_file(file_name) {
        return None;
    }

    // The file's own folder names the resource; look above it.
    let (_, ancestors) = dirs.split_last()?;
    ancestors
        .iter()
        .rev()
        .filter_map(|name| Collection::from_str(name))
        .find(Collection::is_nested)
}

fn is_skipped(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md") | Some("mdx")
    )
}

fn is_index_file(name: &str) -> bool {
    name == "index.md" || name == "index.mdx"
}
