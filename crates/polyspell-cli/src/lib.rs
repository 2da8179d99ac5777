// polyspell-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{ArgAction, Args};
use polyspell::resource::default_search_paths;
use polyspell::{
    DictionarySet, DirectoryResource, FsReader, LanguageCode, MemoryConfig, Settings,
    WordListEngine,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Help footer for tools that load dictionaries with the word-list engine.
pub const WORD_LIST_NOTE: &str = "Dictionaries are read as plain word lists: affix rules (SFX/PFX) \
are not applied, so inflected forms such as \"colours\" from \"colour/S\" are reported \
as misspelled.";

/// Arguments shared by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct DictArgs {
    /// Extra dictionary directory, searched before the defaults (repeatable)
    #[arg(short = 'd', long = "dict-path", value_name = "DIR")]
    pub dict_paths: Vec<PathBuf>,

    /// Language to load, e.g. en_GB (repeatable; overrides the settings file)
    #[arg(short = 'l', long = "lang", value_name = "CODE")]
    pub langs: Vec<LanguageCode>,

    /// Settings file (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// A loaded dictionary set and the settings it follows.
pub struct Session {
    pub config: Arc<MemoryConfig>,
    pub set: Arc<DictionarySet>,
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

/// Settings from `--config` (or defaults) with command line overrides applied.
pub fn load_settings(args: &DictArgs) -> Result<Settings, String> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path).map_err(|e| e.to_string())?,
        None => Settings::default(),
    };
    if !args.langs.is_empty() {
        settings.selected_dictionaries = args.langs.clone();
    }
    let mut dirs = args.dict_paths.clone();
    dirs.append(&mut settings.dictionary_dirs);
    settings.dictionary_dirs = dirs;
    Ok(settings)
}

/// Build a set over the directory search path. Nothing is loaded yet.
///
/// Dictionary directories are fixed here; later settings changes only
/// affect which languages are selected.
pub fn build_session(settings: Settings) -> Session {
    let search_paths = default_search_paths(&settings.dictionary_dirs);
    tracing::debug!(?search_paths, "dictionary search path");

    let engine = WordListEngine::new().with_max_suggestions(settings.max_suggestions);
    let config = Arc::new(MemoryConfig::new(settings));
    let set = Arc::new(DictionarySet::new(
        config.clone(),
        Arc::new(DirectoryResource::new(search_paths)),
        Arc::new(FsReader),
        Arc::new(engine),
    ));
    Session { config, set }
}

/// Load settings, build the set and run the first reload right away.
pub async fn open(args: &DictArgs) -> Result<Session, String> {
    let settings = load_settings(args)?;
    if settings.selected_dictionaries.is_empty() {
        return Err("no languages selected (use --lang or a settings file)".to_string());
    }
    let session = build_session(settings);
    session.set.reload().await;

    let missing: Vec<String> = session
        .config
        .settings()
        .selected_dictionaries
        .iter()
        .filter(|code| !session.set.is_loaded(code))
        .map(ToString::to_string)
        .collect();
    if !missing.is_empty() {
        eprintln!("warning: could not load: {}", missing.join(", "));
    }
    Ok(session)
}

/// Trimmed, non-empty lines from stdin. Stops at the first read error.
pub fn stdin_words() -> impl Iterator<Item = String> {
    io::stdin()
        .lock()
        .lines()
        .map_while(|line| match line {
            Ok(l) => Some(l),
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                None
            }
        })
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
