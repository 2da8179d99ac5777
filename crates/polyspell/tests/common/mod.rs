//! In-memory collaborators for DictionarySet tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use polyspell::{
    ByteReader, Checker, CheckerEngine, DictionaryPaths, DictionaryResource, DictionarySet,
    LanguageCode, LoadError, MemoryConfig, Resolution, Settings,
};

pub fn code(s: &str) -> LanguageCode {
    LanguageCode::new(s)
}

pub fn codes(list: &[&str]) -> Vec<LanguageCode> {
    list.iter().map(|c| code(c)).collect()
}

fn paths_for(code: &str) -> DictionaryPaths {
    DictionaryPaths {
        affix: PathBuf::from(format!("/dicts/{code}.aff")),
        dictionary: PathBuf::from(format!("/dicts/{code}.dic")),
    }
}

/// Resolver backed by a map; unknown codes are unavailable.
#[derive(Default)]
pub struct FakeResource {
    entries: HashMap<LanguageCode, Resolution>,
}

impl FakeResource {
    pub fn exact(mut self, c: &str) -> Self {
        self.entries.insert(code(c), Resolution::Exact(paths_for(c)));
        self
    }

    pub fn fuzzy(mut self, c: &str) -> Self {
        self.entries.insert(code(c), Resolution::Fuzzy(paths_for(c)));
        self
    }
}

impl DictionaryResource for FakeResource {
    fn resolve(&self, code: &LanguageCode) -> Resolution {
        self.entries
            .get(code)
            .cloned()
            .unwrap_or(Resolution::Unavailable)
    }
}

/// Reader backed by a map of path -> bytes. Counts every read.
#[derive(Default)]
pub struct FakeReader {
    files: HashMap<PathBuf, Vec<u8>>,
    stalled: HashSet<PathBuf>,
    pub reads: AtomicUsize,
}

impl FakeReader {
    /// Register a dictionary: `suggestions` go in the affix payload and
    /// `words` in the dictionary payload (see [`FakeEngine`]).
    pub fn dictionary(mut self, c: &str, suggestions: &str, words: &str) -> Self {
        let paths = paths_for(c);
        self.files.insert(paths.affix, suggestions.as_bytes().to_vec());
        self.files.insert(paths.dictionary, words.as_bytes().to_vec());
        self
    }

    /// Register only the dictionary payload; reading the affix fails.
    pub fn without_affix(mut self, c: &str, words: &str) -> Self {
        self.files.insert(paths_for(c).dictionary, words.as_bytes().to_vec());
        self
    }

    /// Register a dictionary whose affix read never completes.
    pub fn stalled(mut self, c: &str) -> Self {
        self.stalled.insert(paths_for(c).affix);
        self
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ByteReader for FakeReader {
    async fn read(&self, path: &Path) -> Result<Vec<u8>, LoadError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.stalled.contains(path) {
            std::future::pending::<()>().await;
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::ReadFailure {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            })
    }
}

/// Engine whose dictionary payload is a whitespace separated word list and
/// whose affix payload is a comma separated suggestion list returned for
/// every rejected term. `MALFORMED` and `PANIC` payloads misbehave.
#[derive(Default)]
pub struct FakeEngine {
    pub builds: AtomicUsize,
}

impl FakeEngine {
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

struct FakeChecker {
    words: Vec<String>,
    suggestions: Vec<String>,
}

impl Checker for FakeChecker {
    fn check(&self, term: &str) -> bool {
        self.words.iter().any(|w| w == term)
    }

    fn suggest(&self, term: &str) -> Vec<String> {
        if self.check(term) {
            Vec::new()
        } else {
            self.suggestions.clone()
        }
    }
}

impl CheckerEngine for FakeEngine {
    fn build(
        &self,
        code: &LanguageCode,
        affix: &[u8],
        dictionary: &[u8],
    ) -> Result<Box<dyn Checker>, LoadError> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        let words = String::from_utf8_lossy(dictionary);
        if words.trim() == "MALFORMED" {
            return Err(LoadError::malformed(code, "unparseable"));
        }
        if words.trim() == "PANIC" {
            panic!("engine blew up on {code}");
        }
        let suggestions = String::from_utf8_lossy(affix);
        Ok(Box::new(FakeChecker {
            words: words.split_whitespace().map(str::to_owned).collect(),
            suggestions: suggestions
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        }))
    }
}

pub struct Fixture {
    pub config: Arc<MemoryConfig>,
    pub reader: Arc<FakeReader>,
    pub engine: Arc<FakeEngine>,
    pub set: Arc<DictionarySet>,
}

impl Fixture {
    pub fn new(desired: &[&str], resource: FakeResource, reader: FakeReader) -> Self {
        let config = Arc::new(MemoryConfig::new(Settings {
            selected_dictionaries: codes(desired),
            startup_delay_ms: 0,
            ..Settings::default()
        }));
        let reader = Arc::new(reader);
        let engine = Arc::new(FakeEngine::default());
        let set = Arc::new(DictionarySet::new(
            config.clone(),
            Arc::new(resource),
            reader.clone(),
            engine.clone(),
        ));
        Self {
            config,
            reader,
            engine,
            set,
        }
    }

    pub fn select(&self, desired: &[&str]) {
        self.config.set_selected_dictionaries(codes(desired));
    }
}

/// en_GB, de_DE and fr_FR all resolvable and readable.
pub fn three_languages(desired: &[&str]) -> Fixture {
    Fixture::new(
        desired,
        FakeResource::default()
            .exact("en_GB")
            .exact("de_DE")
            .exact("fr_FR"),
        FakeReader::default()
            .dictionary("en_GB", "hello, hollow", "hello world colour")
            .dictionary("de_DE", "hallo", "hallo welt")
            .dictionary("fr_FR", "bonjour", "bonjour monde"),
    )
}
