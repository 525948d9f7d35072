use thiserror::Error;

/// Failure writing to the storage backend.
///
/// These never cross the public surface of the store: mutations log and
/// swallow them, because the in-memory list stays authoritative for the
/// session either way.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
