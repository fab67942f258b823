use std::sync::Arc;

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use tokio::sync::watch;

use crate::model::RedirectConfig;

/// Read seam between the externally-owned configuration storage and
/// the decision engine. `None` means no redirect configuration exists
/// at all (as opposed to an empty rules map).
///
/// The engine only ever reads snapshots; it never mutates through
/// this trait.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn snapshot(&self) -> Option<Arc<RedirectConfig>>;
}

/// In-memory store backing tests and hosts without real persistence.
/// Snapshot reads are lock-free; writers replace the snapshot whole.
pub struct InMemoryConfigStore {
    current: ArcSwapOption<RedirectConfig>,
    watch_tx: watch::Sender<Option<Arc<RedirectConfig>>>,
}

impl InMemoryConfigStore {
    pub fn new(config: RedirectConfig) -> Self {
        let current = Arc::new(config);
        let (watch_tx, _watch_rx) = watch::channel(Some(Arc::clone(&current)));
        Self {
            current: ArcSwapOption::from(Some(current)),
            watch_tx,
        }
    }

    /// A store with no configuration at all.
    pub fn empty() -> Self {
        let (watch_tx, _watch_rx) = watch::channel(None);
        Self {
            current: ArcSwapOption::empty(),
            watch_tx,
        }
    }

    /// Replace the current snapshot. Takes effect on the next
    /// navigation that reads it; in-flight evaluations keep the
    /// snapshot they already hold.
    pub fn set(&self, config: RedirectConfig) {
        let next = Arc::new(config);
        self.current.store(Some(Arc::clone(&next)));
        let _ = self.watch_tx.send(Some(next));
    }

    pub fn clear(&self) {
        self.current.store(None);
        let _ = self.watch_tx.send(None);
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<RedirectConfig>>> {
        self.watch_tx.subscribe()
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn snapshot(&self) -> Option<Arc<RedirectConfig>> {
        self.current.load_full()
    }
}
