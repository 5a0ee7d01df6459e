//! CollectionEditor: load a collection file, find and modify named nodes,
//! write the whole document back.
//!
//! Every run is a full read-modify-write cycle. There is no locking, so two
//! editors racing on the same file end with the last writer's content.

mod io;
mod ops;

pub use io::{load, save, to_json_bytes, DEFAULT_INDENT};
pub use ops::{Anchor, Upsert};

use std::path::{Path, PathBuf};

use crate::error::{CollectionError, Result};
use crate::model::Collection;

/// A collection bound to the file it was loaded from.
#[derive(Debug)]
pub struct CollectionEditor {
    path: PathBuf,
    collection: Collection,
    indent: usize,
}

impl CollectionEditor {
    /// Loads `path`; fails with `NotFound` or `Parse`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let collection = load(&path)?;
        Ok(Self {
            path,
            collection,
            indent: DEFAULT_INDENT,
        })
    }

    /// Binds a collection built in memory to `path` without touching the disk.
    /// Fails with `AlreadyExists` if the file exists and `overwrite` is false.
    pub fn create(path: impl Into<PathBuf>, collection: Collection, overwrite: bool) -> Result<Self> {
        let path = path.into();
        if !overwrite && path.exists() {
            return Err(CollectionError::AlreadyExists(path));
        }
        Ok(Self {
            path,
            collection,
            indent: DEFAULT_INDENT,
        })
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut Collection {
        &mut self.collection
    }

    pub fn into_collection(self) -> Collection {
        self.collection
    }

    pub fn save(&self) -> Result<()> {
        save(&self.collection, &self.path, self.indent)
    }
}
