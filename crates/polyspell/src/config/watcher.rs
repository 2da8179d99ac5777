//! Debounced watcher that re-applies a settings file when it changes.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify_debouncer_mini::notify::{self, RecommendedWatcher};
use notify_debouncer_mini::{DebounceEventResult, Debouncer, new_debouncer};

use super::MemoryConfig;

const DEBOUNCE: Duration = Duration::from_millis(300);

/// Watches `path` and calls [`MemoryConfig::reload_from_file`] whenever it
/// changes (debounced). Watching stops when the returned debouncer is dropped.
///
/// The parent directory is watched rather than the file so that editors
/// which replace the file on save keep triggering reloads.
pub fn watch_config_file(
    path: &Path,
    config: Arc<MemoryConfig>,
) -> Result<Debouncer<RecommendedWatcher>, WatchError> {
    let path = path.canonicalize().map_err(WatchError::Canonicalize)?;
    let dir = path
        .parent()
        .ok_or_else(|| WatchError::NoParent(path.clone()))?
        .to_path_buf();
    let target = path.clone();

    let mut debouncer = new_debouncer(DEBOUNCE, move |res: DebounceEventResult| match res {
        Ok(events) => {
            if !events.iter().any(|e| e.path == target) {
                return;
            }
            match config.reload_from_file(&target) {
                Ok(()) => tracing::info!(path = %target.display(), "settings reloaded"),
                Err(e) => tracing::warn!(%e, "ignoring unreadable settings"),
            }
        }
        Err(e) => tracing::warn!(%e, "settings watcher error"),
    })
    .map_err(|e| WatchError::Notify(e.to_string()))?;

    debouncer
        .watcher()
        .watch(&dir, notify::RecursiveMode::NonRecursive)
        .map_err(|e| WatchError::Watch(e.to_string()))?;

    Ok(debouncer)
}

#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("failed to resolve path: {0}")]
    Canonicalize(std::io::Error),
    #[error("settings file has no parent directory: {}", .0.display())]
    NoParent(PathBuf),
    #[error("watcher init: {0}")]
    Notify(String),
    #[error("watch failed: {0}")]
    Watch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_fails_to_watch() {
        let config = Arc::new(MemoryConfig::default());
        let err = watch_config_file(Path::new("/no/such/dir/polyspell.toml"), config).unwrap_err();
        assert!(matches!(err, WatchError::Canonicalize(_)));
    }

    #[test]
    fn existing_file_can_be_watched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("polyspell.toml");
        std::fs::write(&path, "").unwrap();
        let config = Arc::new(MemoryConfig::default());
        assert!(watch_config_file(&path, config).is_ok());
    }
}
