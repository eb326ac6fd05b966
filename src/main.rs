mod config;
mod constants;
mod launcher;
mod paths;
mod scanner;
mod theme;
mod ui;

use bevy::prelude::*;
use bevy::window::{MonitorSelection, WindowPosition};
use bevy_egui::EguiPlugin;
use thiserror::Error;

use config::{ConfigError, LauncherConfig};
use constants::WINDOW_TITLE;
use scanner::{ProjectEntry, ScanError};
use ui::{window_metrics, ProjectList, ShellPlugin};

/// Anything that prevents the launcher window from being built.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Set up file logging for debug builds
#[cfg(debug_assertions)]
fn setup_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use tracing_subscriber::prelude::*;

    let logs_dir = paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        eprintln!("Failed to create logs directory");
        return None;
    }

    let log_file_path = logs_dir.join("setlauncher.log");

    // Append session separator to existing log file
    if let Ok(mut file) = OpenOptions::new().append(true).open(&log_file_path) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = "=".repeat(80);
        let _ = writeln!(
            file,
            "\n\n{}\n=== New Session Started at {} ===\n{}\n",
            separator, timestamp, separator
        );
    }

    let file_appender = tracing_appender::rolling::never(&logs_dir, "setlauncher.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Configure file layer (no ANSI colors for file output)
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_level(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,setlauncher=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Some(guard)
}

#[cfg(not(debug_assertions))]
fn setup_logging() -> Option<()> {
    None
}

/// Load the configuration and scan for sets before any window exists.
fn prepare() -> Result<(LauncherConfig, Vec<ProjectEntry>), StartupError> {
    let config = LauncherConfig::load(&paths::config_file())?;
    let projects = scanner::scan_projects(&config.projects_root, config.row_height)?;
    Ok((config, projects))
}

/// Blocking native dialog for errors that end the session.
fn show_fatal_error(error: &StartupError) {
    error!("Fatal startup error: {}", error);
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Fatal Error")
        .set_description(format!(
            "An unexpected error occurred:\n\n{}\n\nThe application will now close.",
            error
        ))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn run_launcher(config: LauncherConfig, projects: Vec<ProjectEntry>) -> AppExit {
    // Provisional size; the first frame refits the width to the measured names
    let initial = window_metrics(config.row_height, 0.0);

    App::new()
        .insert_resource(ClearColor(theme::clear_color(config.dark_mode)))
        .insert_resource(ProjectList::new(projects))
        .insert_resource(config)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: (initial.width, initial.height).into(),
                position: WindowPosition::Centered(MonitorSelection::Primary),
                visible: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(ShellPlugin)
        .run()
}

fn main() -> AppExit {
    // Keep the guard alive for the duration of the program
    let _log_guard = setup_logging();

    match prepare() {
        Ok((config, projects)) => run_launcher(config, projects),
        Err(e) => {
            show_fatal_error(&e);
            AppExit::error()
        }
    }
}
