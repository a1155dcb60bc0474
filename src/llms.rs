//! Builds the `llms-full.txt` document from a catalog snapshot.

use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::config::{LlmsConfig, ReadErrorPolicy};
use crate::error::{CatalogError, Result};
use crate::models::{Catalog, ContentRecord};

/// Concatenate the source text of every exported resource.
///
/// Resources are taken in collection order (custom pages last, when enabled).
/// A record with no backing file contributes an empty entry. Entries are joined
/// with a single `\n`, so an empty entry still keeps its separator.
///
/// Files are read synchronously, one after the other.
pub fn render(catalog: &Catalog, config: &LlmsConfig) -> Result<String> {
    if !config.llms_txt.enabled {
        return Err(CatalogError::Disabled);
    }

    let entries = catalog
        .resources(config.custom_docs.enabled)
        .map(|record| read_entry(record, config.on_read_error))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Rendered llms-full.txt from {} resources", entries.len());

    Ok(entries.join("\n"))
}

/// Render the document and write it to `output`, or to stdout when `None`.
///
/// Missing parent directories of `output` are created. A reader closing
/// stdout early ends the write without an error. Returns the number of bytes
/// in the document.
pub fn write_to(catalog: &Catalog, config: &LlmsConfig, output: Option<&Path>) -> Result<usize> {
    let body = render(catalog, config)?;

    match output {
        Some(path) => {
            let write_error = |source| CatalogError::Write {
                path: path.to_path_buf(),
                source,
            };
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(write_error)?;
            }
            std::fs::write(path, &body).map_err(write_error)?;
            tracing::info!("Wrote {} bytes to {}", body.len(), path.display());
        }
        None => write_stdout(std::io::stdout().lock(), &body)?,
    }

    Ok(body.len())
}

fn write_stdout(mut out: impl Write, body: &str) -> Result<()> {
    match out.write_all(body.as_bytes()).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed early");
            Ok(())
        }
        Err(e) => Err(CatalogError::Stdout(e)),
    }
}

fn read_entry(record: &ContentRecord, policy: ReadErrorPolicy) -> Result<String> {
    let Some(path) = record.file_path.as_deref() else {
        return Ok(String::new());
    };

    match read_source(path) {
        Ok(content) => Ok(content),
        Err(e) if policy == ReadErrorPolicy::Skip => {
            tracing::warn!("Skipping {} ({}): {}", record.id, record.collection, e);
            Ok(String::new())
        }
        Err(e) => Err(e),
    }
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })
}
