//! Interactive todo list.
//!
//! Reads one command per line from stdin and redraws the list after each.
//! Type `help` for the command list.

use std::io::{self, BufRead, Write};
use todomvc::config::DEFAULT_LOG_FILTER;
use todomvc::repl::{parse_line, ReplCommand, HELP};
use todomvc::{Config, TodoApp, TodoStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();

    // Logs go to stderr so they never interleave with the rendered list
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(seed_demo = config.seed_demo, "Starting todo list");

    let store = if config.seed_demo {
        TodoStore::with_demo_items()
    } else {
        TodoStore::new()
    };
    let mut app = TodoApp::new(store);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", app.view())?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            break;
        };

        match parse_line(&line?) {
            Ok(None) => {}
            Ok(Some(ReplCommand::Input(event))) => {
                let view = app.handle(event);
                writeln!(stdout, "{view}")?;
            }
            Ok(Some(ReplCommand::Show)) => writeln!(stdout, "{}", app.view())?,
            Ok(Some(ReplCommand::Json)) => {
                let json = serde_json::to_string_pretty(&app.view().rows)?;
                writeln!(stdout, "{json}")?;
            }
            Ok(Some(ReplCommand::Help)) => writeln!(stdout, "{HELP}")?,
            Ok(Some(ReplCommand::Quit)) => break,
            Err(err) => writeln!(stdout, "error: {err}")?,
        }
    }

    let store = app.into_store();
    tracing::info!(
        total = store.count(),
        active = store.active_count(),
        "Session ended"
    );
    Ok(())
}
