// polyspell-watch: Keep dictionaries in sync with a settings file.
//
// Loads the languages selected in FILE after the configured startup delay,
// watches FILE for changes and prints every dictionary event as one JSON
// line on stdout, e.g.
//   {"event":"updated","loaded":["en_GB","de_DE"]}
//   {"event":"verdictsInvalidated"}
//
// Usage:
//   polyspell-watch -c FILE [-d DIR] [-v]

use std::time::Duration;

use clap::Parser;
use polyspell::ReloadService;
use polyspell::config::watch_config_file;
use polyspell_cli::{DictArgs, build_session, fatal, init_tracing, load_settings};
use tokio::sync::broadcast::error::RecvError;

#[derive(Parser)]
#[command(name = "polyspell-watch")]
#[command(about = "Watch a settings file and report dictionary reloads as JSON lines")]
struct Cli {
    #[command(flatten)]
    dict: DictArgs,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.dict.verbose);

    let Some(path) = cli.dict.config.clone() else {
        fatal("--config FILE is required");
    };
    let settings = load_settings(&cli.dict).unwrap_or_else(|e| fatal(&e));
    let delay = Duration::from_millis(settings.startup_delay_ms);

    let session = build_session(settings);
    let _watcher = watch_config_file(&path, session.config.clone())
        .unwrap_or_else(|e| fatal(&e.to_string()));

    let mut events = session.set.subscribe();
    let service = ReloadService::spawn(session.set.clone(), delay);
    tracing::info!(path = %path.display(), "watching settings");

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::warn!(%e, "cannot serialize event"),
                },
                Err(RecvError::Lagged(skipped)) => tracing::warn!(skipped, "dropped events"),
                Err(RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    service.shutdown().await;
}
