// Criterion benchmarks for polyspell.
//
// Uses generated word lists so no dictionary files are needed.
//
// Run:
//   cargo bench -p polyspell

use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use polyspell::{
    Checker, CheckerEngine, DictionaryResource, DictionarySet, FsReader,
    LanguageCode, MemoryConfig, Resolution, Settings, WordListEngine,
};

const SYLLABLES: [&str; 12] = [
    "ka", "lo", "mi", "ne", "ru", "sa", "te", "vi", "po", "da", "fe", "gu",
];

/// Deterministic pseudo-words: every 3-syllable combination.
fn word_list() -> Vec<String> {
    let mut words = Vec::new();
    for a in SYLLABLES {
        for b in SYLLABLES {
            for c in SYLLABLES {
                words.push(format!("{a}{b}{c}"));
            }
        }
    }
    words
}

fn dictionary_bytes(words: &[String]) -> Vec<u8> {
    let mut out = format!("{}\n", words.len());
    for w in words {
        out.push_str(w);
        out.push('\n');
    }
    out.into_bytes()
}

fn build_checker() -> Box<dyn Checker> {
    let words = word_list();
    WordListEngine::new()
        .build(
            &LanguageCode::new("xx"),
            b"SET UTF-8\nTRY aeioudfgklmnprstv\n",
            &dictionary_bytes(&words),
        )
        .expect("generated dictionary")
}

/// Never resolves anything; the set below is only queried, not reloaded.
struct NoResource;

impl DictionaryResource for NoResource {
    fn resolve(&self, _code: &LanguageCode) -> Resolution {
        Resolution::Unavailable
    }
}

fn bench_build(c: &mut Criterion) {
    let words = word_list();
    let dic = dictionary_bytes(&words);
    let engine = WordListEngine::new();
    c.bench_function("build_1728_words", |b| {
        b.iter(|| {
            std::hint::black_box(
                engine
                    .build(&LanguageCode::new("xx"), b"SET UTF-8\n", &dic)
                    .expect("build"),
            );
        });
    });
}

fn bench_check(c: &mut Criterion) {
    let checker = build_checker();
    let words = word_list();
    c.bench_function("check_1728_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(checker.check(word));
            }
        });
    });
}

fn bench_suggest(c: &mut Criterion) {
    let checker = build_checker();
    let typos = ["kalomx", "ksalomi", "kaolmi", "Kalomi", "kalom"];
    c.bench_function("suggest_5_typos", |b| {
        b.iter(|| {
            for typo in typos {
                std::hint::black_box(checker.suggest(typo));
            }
        });
    });
}

fn bench_empty_set_check(c: &mut Criterion) {
    let set = DictionarySet::new(
        Arc::new(MemoryConfig::new(Settings::default())),
        Arc::new(NoResource),
        Arc::new(FsReader),
        Arc::new(WordListEngine::new()),
    );
    c.bench_function("set_check_nothing_desired", |b| {
        b.iter(|| std::hint::black_box(set.check("kalomi")));
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_check,
    bench_suggest,
    bench_empty_set_check
);
criterion_main!(benches);
