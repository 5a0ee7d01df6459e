//! Errors raised while loading, editing and saving a collection.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::SectionPath;

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("collection file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed collection {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("section not found: {0}")]
    SectionNotFound(SectionPath),

    #[error("endpoint not found: {section} > {name}")]
    EndpointNotFound { section: SectionPath, name: String },

    #[error("collection already exists: {} (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}

pub type Result<T, E = CollectionError> = std::result::Result<T, E>;
