use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access history file `{}`: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("storage backend error: {0}")]
    Backend(String),
}
