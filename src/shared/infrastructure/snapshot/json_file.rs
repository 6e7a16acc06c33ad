use crate::shared::infrastructure::snapshot::{SnapshotError, SnapshotRepository};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::path::PathBuf;
use tokio::fs;

/// Snapshot kept as a single pretty-printed JSON document.
///
/// Every `save` rewrites the whole file. A missing file is a read error, not
/// an empty state: callers decide whether that is fatal.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshot {
    path: PathBuf,
}

impl JsonFileSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl<T> SnapshotRepository<T> for JsonFileSnapshot
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn load(&self) -> Result<T, SnapshotError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| SnapshotError::Read(format!("{}: {e}", self.path.display())))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| SnapshotError::Malformed(format!("{}: {e}", self.path.display())))
    }

    async fn save(&self, state: &T) -> Result<(), SnapshotError> {
        let mut data =
            serde_json::to_vec_pretty(state).map_err(|e| SnapshotError::Write(e.to_string()))?;
        data.push(b'\n');
        fs::write(&self.path, data)
            .await
            .map_err(|e| SnapshotError::Write(format!("{}: {e}", self.path.display())))
    }
}
