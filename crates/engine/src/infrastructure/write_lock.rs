//! Process-wide writer serialisation.

use tokio::sync::{Mutex, MutexGuard};

/// Single global write lock.
///
/// Every mutating use case holds the guard across its whole
/// read-validate-commit cycle, so two requests can never both act on the same
/// stale snapshot (e.g. two loads each creating a fresh mission for one mover).
#[derive(Debug, Default)]
pub struct WriteLock {
    inner: Mutex<()>,
}

impl WriteLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.inner.lock().await
    }
}
