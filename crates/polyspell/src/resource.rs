// Dictionary resource resolution and byte reading

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use polyspell_core::{LanguageCode, LoadError, ResolutionStatus};

/// Environment variable holding extra dictionary directories
/// (`:`-separated on Unix, `;` on Windows).
pub const DICT_PATH_ENV: &str = "POLYSPELL_DICT_PATH";

/// Affix file extension.
const AFFIX_EXT: &str = "aff";

/// Dictionary file extension.
const DICTIONARY_EXT: &str = "dic";

/// Locations of the two payloads that make up one dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryPaths {
    pub affix: PathBuf,
    pub dictionary: PathBuf,
}

/// Result of looking a language code up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Files for exactly the requested code.
    Exact(DictionaryPaths),
    /// Files for a related code (same primary language) only.
    Fuzzy(DictionaryPaths),
    Unavailable,
}

impl Resolution {
    pub fn status(&self) -> ResolutionStatus {
        match self {
            Resolution::Exact(_) => ResolutionStatus::Exact,
            Resolution::Fuzzy(_) => ResolutionStatus::Fuzzy,
            Resolution::Unavailable => ResolutionStatus::None,
        }
    }
}

/// Maps language codes to dictionary files.
pub trait DictionaryResource: Send + Sync {
    fn resolve(&self, code: &LanguageCode) -> Resolution;
}

/// Reads a payload. Failures are reported as [`LoadError::ReadFailure`].
#[async_trait]
pub trait ByteReader: Send + Sync {
    async fn read(&self, path: &Path) -> Result<Vec<u8>, LoadError>;
}

/// [`ByteReader`] over the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsReader;

#[async_trait]
impl ByteReader for FsReader {
    async fn read(&self, path: &Path) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(path).await.map_err(|source| LoadError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolves `<code>.aff` / `<code>.dic` pairs from a list of directories.
///
/// Directories are searched in order and the first exact pair wins. When
/// no directory holds an exact pair, the first pair whose stem has the same
/// primary language (`en_US` for `en_GB`) is reported as fuzzy.
#[derive(Debug, Clone, Default)]
pub struct DirectoryResource {
    dirs: Vec<PathBuf>,
}

impl DirectoryResource {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    fn pair_in(dir: &Path, stem: &str) -> Option<DictionaryPaths> {
        let affix = dir.join(format!("{stem}.{AFFIX_EXT}"));
        let dictionary = dir.join(format!("{stem}.{DICTIONARY_EXT}"));
        (affix.is_file() && dictionary.is_file()).then_some(DictionaryPaths { affix, dictionary })
    }

    fn related_in(dir: &Path, code: &LanguageCode) -> Option<DictionaryPaths> {
        let entries = std::fs::read_dir(dir).ok()?;
        let mut stems: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == DICTIONARY_EXT))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_owned))
            .filter(|stem| LanguageCode::new(stem.as_str()).language() == code.language())
            .collect();
        // read_dir order is platform dependent
        stems.sort();
        stems.iter().find_map(|stem| Self::pair_in(dir, stem))
    }
}

impl DictionaryResource for DirectoryResource {
    fn resolve(&self, code: &LanguageCode) -> Resolution {
        if let Some(paths) = self.dirs.iter().find_map(|dir| Self::pair_in(dir, code.as_str())) {
            return Resolution::Exact(paths);
        }
        match self.dirs.iter().find_map(|dir| Self::related_in(dir, code)) {
            Some(paths) => Resolution::Fuzzy(paths),
            None => Resolution::Unavailable,
        }
    }
}

/// Build the list of directories to search for dictionaries.
///
/// Search order:
/// 1. `extra` directories (command line / settings)
/// 2. `POLYSPELL_DICT_PATH`
/// 3. the user data directory (`<data_dir>/hunspell`)
/// 4. system hunspell / myspell directories
/// 5. the current working directory
pub fn default_search_paths(extra: &[PathBuf]) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = extra.to_vec();

    if let Some(env_path) = std::env::var_os(DICT_PATH_ENV) {
        paths.extend(std::env::split_paths(&env_path));
    }

    if let Some(data) = dirs::data_dir() {
        paths.push(data.join("hunspell"));
    }

    #[cfg(unix)]
    {
        paths.push(PathBuf::from("/usr/share/hunspell"));
        paths.push(PathBuf::from("/usr/share/myspell/dicts"));
        paths.push(PathBuf::from("/usr/local/share/hunspell"));
    }
    #[cfg(target_os = "macos")]
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join("Library").join("Spelling"));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}
