use crate::shared::infrastructure::snapshot::{SnapshotError, SnapshotRepository};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct InMemorySnapshot<T> {
    state: RwLock<Option<T>>,
    offline: AtomicBool,
    saves: AtomicUsize,
    delay_save_ms: AtomicU64,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl<T> InMemorySnapshot<T> {
    /// A snapshot that has never been written; loading it fails like a missing file.
    pub fn empty() -> Self {
        Self {
            state: RwLock::new(None),
            offline: AtomicBool::new(false),
            saves: AtomicUsize::new(0),
            delay_save_ms: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn seeded(state: T) -> Self {
        Self {
            state: RwLock::new(Some(state)),
            ..Self::empty()
        }
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Makes every `save` sleep before it stores, so callers can overlap or cancel it.
    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::SeqCst);
    }

    /// Highest number of `save` calls that were ever running at the same time.
    pub fn max_concurrent_saves(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<(), SnapshotError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(SnapshotError::Offline);
        }
        Ok(())
    }
}

impl<T: Clone> InMemorySnapshot<T> {
    pub async fn current(&self) -> Option<T> {
        self.state.read().await.clone()
    }
}

#[async_trait]
impl<T> SnapshotRepository<T> for InMemorySnapshot<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn load(&self) -> Result<T, SnapshotError> {
        self.check_online()?;
        self.state
            .read()
            .await
            .clone()
            .ok_or_else(|| SnapshotError::Read("no snapshot has been written".into()))
    }

    async fn save(&self, state: &T) -> Result<(), SnapshotError> {
        self.check_online()?;
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        let delay = self.delay_save_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        *self.state.write().await = Some(state.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }
}
