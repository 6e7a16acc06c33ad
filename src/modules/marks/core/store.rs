// Record store: the in-memory mark sheet and its snapshot.
//
// Mutations run in a spawned task that owns the write guard. The next sheet is
// built as a copy, saved, and only then swapped into memory. Dropping the
// caller's future (a client hanging up) therefore cannot leave memory ahead of
// the snapshot or release the lock while a write is still in flight.

use crate::modules::marks::core::mark::Mark;
use crate::modules::marks::core::record::{DeleteOutcome, MarkSheet, Record, SearchOutcome};
use crate::shared::infrastructure::snapshot::{SnapshotError, SnapshotRepository};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(#[source] SnapshotError),

    #[error("snapshot write failed: {0}")]
    WriteFailure(#[source] SnapshotError),

    #[error("store task aborted: {0}")]
    Aborted(String),
}

pub struct RecordStore {
    sheet: Arc<RwLock<MarkSheet>>,
    snapshot: Arc<dyn SnapshotRepository<MarkSheet>>,
}

impl RecordStore {
    pub async fn load(
        snapshot: Arc<dyn SnapshotRepository<MarkSheet>>,
    ) -> Result<Self, StoreError> {
        let sheet = snapshot.load().await.map_err(StoreError::CorruptSnapshot)?;
        tracing::info!(records = sheet.len(), "mark sheet loaded from snapshot");
        Ok(Self {
            sheet: Arc::new(RwLock::new(sheet)),
            snapshot,
        })
    }

    pub async fn add(&self, student: &str, mark: Mark) -> Result<Record, StoreError> {
        let key = student.to_string();
        let stored = mark.clone();
        let result = self
            .commit(move |sheet| {
                sheet.insert(key, stored);
                ((), true)
            })
            .await;

        if let Err(e) = result {
            tracing::error!(%student, error = %e, "failed to persist added mark");
            return Err(e);
        }
        tracing::debug!(%student, %mark, "mark stored");
        Ok(Record {
            student: student.to_string(),
            mark,
        })
    }

    pub async fn search(&self, student: &str) -> SearchOutcome {
        match self.sheet.read().await.get(student) {
            Some(mark) => SearchOutcome::Found(Record {
                student: student.to_string(),
                mark: mark.clone(),
            }),
            None => SearchOutcome::NotFound(student.to_string()),
        }
    }

    pub async fn all(&self) -> MarkSheet {
        self.sheet.read().await.clone()
    }

    pub async fn delete(&self, student: &str) -> Result<DeleteOutcome, StoreError> {
        let key = student.to_string();
        let removed = self
            .commit(move |sheet| {
                let removed = sheet.remove(&key).is_some();
                (removed, removed)
            })
            .await
            .inspect_err(|e| tracing::error!(%student, error = %e, "failed to persist deletion"))?;

        if !removed {
            return Ok(DeleteOutcome::NotFound(student.to_string()));
        }
        tracing::debug!(%student, "mark deleted");
        Ok(DeleteOutcome::Deleted(student.to_string()))
    }

    /// Applies `change` to a copy of the sheet and persists it when the change
    /// reports that something moved. Runs to completion even if the caller is dropped.
    async fn commit<R, F>(&self, change: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut MarkSheet) -> (R, bool) + Send + 'static,
        R: Send + 'static,
    {
        let sheet = self.sheet.clone();
        let snapshot = self.snapshot.clone();
        tokio::spawn(async move {
            let mut current = sheet.write_owned().await;
            let mut next = current.clone();
            let (outcome, changed) = change(&mut next);
            if changed {
                snapshot
                    .save(&next)
                    .await
                    .map_err(StoreError::WriteFailure)?;
                *current = next;
            }
            Ok(outcome)
        })
        .await
        .map_err(|e| StoreError::Aborted(e.to_string()))?
    }
}
