// Translate-AI: terminal translation widget backed by a hosted language model

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use translate_ai::clipboard::SystemClipboard;
use translate_ai::config::{self, Config};
use translate_ai::model::MistralClient;
use translate_ai::session::Session;
use translate_ai::theme_store;
use translate_ai::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // The terminal belongs to the UI, so diagnostics go to a file
    let _log_guard = match config::log_dir() {
        Ok(dir) => Some(init_file_logger(&dir)),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };

    if config.api_key.is_none() {
        tracing::warn!(
            "no {} set; translations will fail until one is provided",
            config::API_KEY_VAR
        );
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let model = Arc::new(MistralClient::new(&config)?);
    // Without a config dir the theme still toggles, it just is not remembered
    let theme_dir = match config::config_dir() {
        Ok(dir) => Some(dir),
        Err(err) => {
            tracing::warn!(error = %err, "theme preference will not persist");
            None
        }
    };
    let session = Session::load(
        model,
        Box::new(SystemClipboard::new()),
        theme_store::open(theme_dir),
        runtime.handle().clone(),
    );

    tracing::info!(model = %config.model, base_url = %config.base_url, "starting translate-ai");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // An unresolved model call must not hold up exit
    runtime.shutdown_background();

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn init_file_logger(log_dir: &Path) -> tracing_appender::non_blocking::WorkerGuard {
    if let Err(err) = fs::create_dir_all(log_dir) {
        eprintln!("failed to create log dir `{}`: {err}", log_dir.display());
    }
    let file_appender = tracing_appender::rolling::daily(log_dir, "translate-ai.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,translate_ai=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(writer)
        .try_init();

    guard
}
