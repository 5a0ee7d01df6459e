//! Reading and writing collection files.

use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{CollectionError, Result};
use crate::model::Collection;

/// Indentation used when none is configured (matches `json.dump(..., indent=2)`).
pub const DEFAULT_INDENT: usize = 2;

/// Reads and parses the whole collection file.
pub fn load(path: &Path) -> Result<Collection> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CollectionError::NotFound(path.to_path_buf())
        } else {
            CollectionError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let collection: Collection =
        serde_json::from_slice(&bytes).map_err(|source| CollectionError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        path = %path.display(),
        items = collection.item.len(),
        "loaded collection"
    );
    Ok(collection)
}

/// Pretty-prints with `indent` spaces per level and a trailing newline.
pub fn to_json_bytes(collection: &Collection, indent: usize) -> Result<Vec<u8>> {
    let indent = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    collection.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Writes the collection to a sibling temp file and renames it over `path`,
/// so readers never observe a half-written document. Permissions of an
/// existing file are kept.
pub fn save(collection: &Collection, path: &Path, indent: usize) -> Result<()> {
    let bytes = to_json_bytes(collection, indent)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_error(path, e))?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| write_error(path, e))?;
    }
    tmp.write_all(&bytes).map_err(|e| write_error(path, e))?;
    tmp.as_file().sync_all().map_err(|e| write_error(path, e))?;
    tmp.persist(path).map_err(|e| write_error(path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved collection");
    Ok(())
}

fn write_error(path: &Path, source: io::Error) -> CollectionError {
    CollectionError::Write {
        path: path.to_path_buf(),
        source,
    }
}
