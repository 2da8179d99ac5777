// Background task that keeps a DictionarySet in sync with its config

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::config::SELECTED_DICTIONARIES;
use crate::set::DictionarySet;

/// Runs the deferred first reload, then one reload per change of the
/// desired dictionary list.
pub struct ReloadService {
    handle: JoinHandle<()>,
}

impl ReloadService {
    /// Spawn the service on the current tokio runtime.
    ///
    /// The config subscription is taken before the startup delay so that
    /// changes made during the delay are not lost.
    pub fn spawn(set: Arc<DictionarySet>, startup_delay: Duration) -> Self {
        let mut changes = set.config().subscribe();

        let handle = tokio::spawn(async move {
            if !startup_delay.is_zero() {
                tokio::time::sleep(startup_delay).await;
            }
            set.reload().await;

            loop {
                match changes.recv().await {
                    Ok(change) if change.key == SELECTED_DICTIONARIES => set.reload().await,
                    Ok(change) => tracing::trace!(key = %change.key, "ignoring config change"),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "config changes lagged, reloading");
                        set.reload().await;
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            tracing::debug!("reload service stopped");
        });

        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the service. A reload in progress is abandoned at its next
    /// suspension point; already loaded dictionaries stay loaded.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }
}
