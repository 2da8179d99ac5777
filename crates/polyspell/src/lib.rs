//! Multi-dictionary spell-check aggregation.
//!
//! A [`DictionarySet`] keeps one checker per active language and answers
//! `check` / `suggest` over the union of them. The set of active languages
//! comes from a [`ConfigSource`]; [`DictionarySet::reload`] reconciles the
//! loaded dictionaries against it, loading only what is new and dropping
//! only what was removed.
//!
//! Module map:
//!   - `set`: the aggregator and its reconciliation logic
//!   - `config`: settings, the in-memory config source, file watching
//!   - `resource`: dictionary file resolution and byte reading
//!   - `engine`: the per-language checker seam
//!   - `wordlist`: built-in word-list checker engine
//!   - `suggestion`: edit-operation suggestion generators
//!   - `events`: notifications emitted after reloads
//!   - `service`: background task driving reloads from config changes
//!   - `cache`: consumer-side verdict cache

pub mod cache;
pub mod config;
pub mod engine;
pub mod events;
pub mod resource;
pub mod service;
pub mod set;
pub mod speller;
pub mod suggestion;
pub mod wordlist;

pub use polyspell_core::{CheckResult, LanguageCode, LoadError, ResolutionStatus, SpellResult};

pub use cache::VerdictCache;
pub use config::{ConfigChange, ConfigSource, MemoryConfig, SELECTED_DICTIONARIES, Settings};
pub use engine::{Checker, CheckerEngine};
pub use events::DictionaryEvent;
pub use resource::{ByteReader, DictionaryPaths, DictionaryResource, DirectoryResource, FsReader, Resolution};
pub use service::ReloadService;
pub use set::DictionarySet;
pub use wordlist::WordListEngine;
