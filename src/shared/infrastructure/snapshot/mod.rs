// Snapshot port: whole-state persistence for a value that is read once at
// startup and rewritten after every mutation.
//
// Adapters
// - json_file: pretty-printed JSON on disk.
// - in_memory: tests and local development.

pub mod in_memory;
pub mod json_file;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("cannot read snapshot: {0}")]
    Read(String),

    #[error("snapshot is not well-formed: {0}")]
    Malformed(String),

    #[error("cannot write snapshot: {0}")]
    Write(String),

    #[error("snapshot backend offline")]
    Offline,
}

#[async_trait]
pub trait SnapshotRepository<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    async fn load(&self) -> Result<T, SnapshotError>;
    async fn save(&self, state: &T) -> Result<(), SnapshotError>;
}
