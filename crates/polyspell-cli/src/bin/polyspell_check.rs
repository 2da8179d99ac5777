// polyspell-check: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and checks each against every
// selected dictionary:
//   C: word    (correct in at least one language)
//   W: word    (misspelled in every language)
//   N: word    (selected dictionaries not all loaded)
//
// Usage:
//   polyspell-check -l en_GB [-l de_DE] [-d DIR] [-c FILE] [-s]

use std::io::{self, Write};

use clap::Parser;
use polyspell::{CheckResult, VerdictCache};
use polyspell_cli::{DictArgs, WORD_LIST_NOTE, fatal, init_tracing, open, stdin_words};

#[derive(Parser)]
#[command(name = "polyspell-check")]
#[command(about = "Check spelling of words from stdin")]
#[command(after_help = WORD_LIST_NOTE)]
struct Cli {
    #[command(flatten)]
    dict: DictArgs,

    /// Also print suggestions for misspelled words
    #[arg(short = 's', long = "suggest")]
    suggest: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.dict.verbose);

    let session = open(&cli.dict).await.unwrap_or_else(|e| fatal(&e));
    let mut cache = VerdictCache::default();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for word in stdin_words() {
        match cache.check_with_cache(&word, &session.set) {
            CheckResult::Correct => {
                let _ = writeln!(out, "C: {word}");
            }
            CheckResult::Incorrect => {
                let _ = writeln!(out, "W: {word}");
                if cli.suggest {
                    for suggestion in session.set.suggest(&word) {
                        let _ = writeln!(out, "S: {suggestion}");
                    }
                }
            }
            CheckResult::NotReady => {
                let _ = writeln!(out, "N: {word}");
            }
        }
    }
}
