use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnipError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("a snippet with key {0:?} already exists")]
    DuplicateKey(String),
    #[error("no snippet found for key {0:?}")]
    NotFound(String),
    #[error("clipboard error: {0}")]
    Clipboard(String),
    #[error("invalid input: {0}")]
    MalformedInput(String),
    #[error("request failed: {0}")]
    Http(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, SnipError>;
