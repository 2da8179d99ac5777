// polyspell-suggest: Generate spelling suggestions.
//
// Suggestions from every selected dictionary are listed in load order.
// Correctly spelled words are printed as-is.
//
// Usage:
//   polyspell-suggest -l en_GB [-d DIR] [-c FILE] [-n N] [WORD...]

use std::io::{self, Write};

use clap::Parser;
use polyspell::{CheckResult, DictionarySet};
use polyspell_cli::{DictArgs, WORD_LIST_NOTE, build_session, fatal, init_tracing, load_settings, stdin_words};

#[derive(Parser)]
#[command(name = "polyspell-suggest")]
#[command(about = "Generate spelling suggestions for words (arguments or stdin)")]
#[command(after_help = WORD_LIST_NOTE)]
struct Cli {
    #[command(flatten)]
    dict: DictArgs,

    /// Maximum suggestions per dictionary
    #[arg(short = 'n', long = "max-suggestions", value_name = "N")]
    max_suggestions: Option<usize>,

    /// Words to look up; stdin is read when none are given
    #[arg(value_name = "WORD")]
    words: Vec<String>,
}

fn suggest_word(word: &str, set: &DictionarySet, out: &mut impl Write) {
    match set.check(word) {
        CheckResult::Correct => {
            let _ = writeln!(out, "{word} (correct)");
        }
        CheckResult::NotReady => {
            let _ = writeln!(out, "{word}: (dictionaries not ready)");
        }
        CheckResult::Incorrect => {
            let suggestions = set.suggest(word);
            if suggestions.is_empty() {
                let _ = writeln!(out, "{word}: (no suggestions)");
            } else {
                let _ = writeln!(out, "{word}:");
                for s in &suggestions {
                    let _ = writeln!(out, "  {s}");
                }
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.dict.verbose);

    let mut settings = load_settings(&cli.dict).unwrap_or_else(|e| fatal(&e));
    if settings.selected_dictionaries.is_empty() {
        fatal("no languages selected (use --lang or a settings file)");
    }
    if let Some(n) = cli.max_suggestions {
        settings.max_suggestions = n;
    }
    let session = build_session(settings);
    session.set.reload().await;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.words.is_empty() {
        for word in stdin_words() {
            suggest_word(&word, &session.set, &mut out);
        }
    } else {
        for word in &cli.words {
            suggest_word(word, &session.set, &mut out);
        }
    }
}
