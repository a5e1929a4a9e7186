// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod commands;

use artlens_infrastructure::ArtlensPaths;
use tracing_subscriber::EnvFilter;

fn main() {
    let _log_guard = init_tracing();

    let bootstrap = tauri::async_runtime::block_on(app::bootstrap::bootstrap());

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(bootstrap.app_state)
        .invoke_handler(commands::handlers())
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes tracing with a daily-rolling file appender in the app's log
/// directory, falling back to stderr when the directory cannot be resolved.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match ArtlensPaths::logs_dir() {
        Ok(logs_dir) => {
            let appender = tracing_appender::rolling::daily(logs_dir, "artlens-desktop.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        Err(err) => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            tracing::warn!("[Main] Logging to stderr, no log directory: {}", err);
            None
        }
    }
}
