// DictionarySet: the loaded dictionaries and their reconciliation
//
// Queries (`check`, `suggest`, `loaded`, `is_loaded`) are synchronous and
// only take the read lock. `reload` is the only writer and the only async
// operation: it reads payloads through the `ByteReader`, builds checkers on
// the blocking pool and takes the write lock just long enough to remove or
// insert entries. Reloads are serialized by `reload_lock`.

use std::sync::Arc;

use hashbrown::HashSet;
use parking_lot::{Mutex, RwLock};
use polyspell_core::{CheckResult, LanguageCode, LoadError};
use tokio::sync::broadcast;

use crate::config::ConfigSource;
use crate::engine::{Checker, CheckerEngine};
use crate::events::DictionaryEvent;
use crate::resource::{ByteReader, DictionaryResource, Resolution};

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// One successfully loaded language.
struct LoadedDictionary {
    code: LanguageCode,
    checker: Box<dyn Checker>,
}

/// Aggregates one checker per active language.
pub struct DictionarySet {
    config: Arc<dyn ConfigSource>,
    resource: Arc<dyn DictionaryResource>,
    reader: Arc<dyn ByteReader>,
    engine: Arc<dyn CheckerEngine>,
    loaded: RwLock<Vec<LoadedDictionary>>,
    /// Desired set handled by the last completed reload.
    reconciled: Mutex<Option<HashSet<LanguageCode>>>,
    reload_lock: tokio::sync::Mutex<()>,
    events: broadcast::Sender<DictionaryEvent>,
}

impl DictionarySet {
    /// Create an empty set. Nothing is loaded until [`reload`](Self::reload).
    pub fn new(
        config: Arc<dyn ConfigSource>,
        resource: Arc<dyn DictionaryResource>,
        reader: Arc<dyn ByteReader>,
        engine: Arc<dyn CheckerEngine>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            config,
            resource,
            reader,
            engine,
            loaded: RwLock::new(Vec::new()),
            reconciled: Mutex::new(None),
            reload_lock: tokio::sync::Mutex::new(()),
            events,
        }
    }

    /// Receive [`DictionaryEvent`]s emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DictionaryEvent> {
        self.events.subscribe()
    }

    pub fn config(&self) -> &Arc<dyn ConfigSource> {
        &self.config
    }

    /// Check `term` against every loaded dictionary.
    ///
    /// - `NotReady` while the loaded set differs from the desired set
    /// - `Correct` when no dictionaries are desired nor loaded
    /// - otherwise `Correct` if any dictionary accepts the term
    pub fn check(&self, term: &str) -> CheckResult {
        let loaded = self.loaded.read();
        if !self.ready(&loaded) {
            return CheckResult::NotReady;
        }
        if loaded.is_empty() {
            return CheckResult::Correct;
        }
        if loaded.iter().any(|dict| dict.checker.check(term)) {
            CheckResult::Correct
        } else {
            CheckResult::Incorrect
        }
    }

    /// Suggestions from every loaded dictionary, concatenated in load order.
    ///
    /// Each dictionary's own ranking is kept; nothing is deduplicated.
    /// Empty while not ready or when nothing is loaded.
    pub fn suggest(&self, term: &str) -> Vec<String> {
        let loaded = self.loaded.read();
        if !self.ready(&loaded) {
            return Vec::new();
        }
        loaded
            .iter()
            .flat_map(|dict| dict.checker.suggest(term))
            .collect()
    }

    /// Codes of the loaded dictionaries, in iteration order.
    pub fn loaded(&self) -> Vec<LanguageCode> {
        self.loaded.read().iter().map(|d| d.code.clone()).collect()
    }

    pub fn is_loaded(&self, code: &LanguageCode) -> bool {
        self.loaded.read().iter().any(|d| &d.code == code)
    }

    /// Whether the loaded set currently equals the desired set.
    pub fn is_ready(&self) -> bool {
        self.ready(&self.loaded.read())
    }

    fn ready(&self, loaded: &[LoadedDictionary]) -> bool {
        let desired: HashSet<LanguageCode> =
            self.config.selected_dictionaries().into_iter().collect();
        desired.len() == loaded.len() && loaded.iter().all(|d| desired.contains(&d.code))
    }

    /// Reconcile the loaded dictionaries with the desired list.
    ///
    /// Loads what is newly desired, drops what is no longer desired and
    /// leaves the rest untouched. Per-language failures are logged and
    /// skipped; this never fails. Emits [`DictionaryEvent::Updated`] and
    /// [`DictionaryEvent::VerdictsInvalidated`] unless nothing changed.
    pub async fn reload(&self) {
        let _guard = self.reload_lock.lock().await;

        let desired = dedup(self.config.selected_dictionaries());
        let desired_set: HashSet<LanguageCode> = desired.iter().cloned().collect();
        let loaded_set: HashSet<LanguageCode> = self.loaded().into_iter().collect();

        if desired_set == loaded_set {
            tracing::debug!(?desired, "dictionary set already up to date");
            *self.reconciled.lock() = Some(desired_set);
            return;
        }
        // Languages that failed for this exact desired set are not retried
        // until the desired set changes.
        if self.reconciled.lock().as_ref() == Some(&desired_set) {
            tracing::debug!(?desired, "dictionary set already reconciled");
            return;
        }

        // Until this reload completes, the marker must not vouch for the
        // loaded state: a cancelled reload may leave it partially updated.
        *self.reconciled.lock() = None;

        let unloaded = {
            let mut loaded = self.loaded.write();
            let before = loaded.len();
            loaded.retain(|dict| desired_set.contains(&dict.code));
            before - loaded.len()
        };

        let mut failed = 0usize;
        for code in desired.iter().filter(|code| !loaded_set.contains(*code)) {
            match self.load_one(code).await {
                Ok(checker) => {
                    tracing::debug!(%code, "dictionary loaded");
                    self.loaded.write().push(LoadedDictionary {
                        code: code.clone(),
                        checker,
                    });
                }
                Err(e) => {
                    failed += 1;
                    tracing::warn!(%code, error = %e, "skipping dictionary");
                }
            }
        }

        *self.reconciled.lock() = Some(desired_set);

        let loaded = self.loaded();
        tracing::info!(?loaded, unloaded, failed, "dictionary set reloaded");
        // Nobody listening is fine.
        let _ = self.events.send(DictionaryEvent::Updated { loaded });
        let _ = self.events.send(DictionaryEvent::VerdictsInvalidated);
    }

    async fn load_one(&self, code: &LanguageCode) -> Result<Box<dyn Checker>, LoadError> {
        let paths = match self.resource.resolve(code) {
            Resolution::Exact(paths) => paths,
            other => {
                return Err(LoadError::ResourceUnavailable {
                    code: code.clone(),
                    status: other.status(),
                });
            }
        };

        let affix = self.reader.read(&paths.affix).await?;
        let dictionary = self.reader.read(&paths.dictionary).await?;

        let engine = Arc::clone(&self.engine);
        let owned_code = code.clone();
        tokio::task::spawn_blocking(move || engine.build(&owned_code, &affix, &dictionary))
            .await
            .map_err(|e| LoadError::malformed(code, format!("checker engine panicked: {e}")))?
    }
}

/// Drop repeated codes, keeping first occurrences in order.
fn dedup(codes: Vec<LanguageCode>) -> Vec<LanguageCode> {
    let mut seen = HashSet::with_capacity(codes.len());
    codes.into_iter().filter(|c| seen.insert(c.clone())).collect()
}
