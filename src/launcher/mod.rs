//! OS-level actions: opening sets and folders, launching executables.
//!
//! Session actions report a [`LaunchOutcome`]; [`next_state`] decides whether
//! the launcher session ends. Only opening a set or starting Live ends it.
//! Showing a folder is fire-and-forget and never touches the session.

use bevy::log::{info, warn};
use std::path::Path;
use std::process::{Command, Stdio};

/// Result of handing something off to the operating system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Launched,
    LaunchFailed(String),
}

/// User actions whose outcome the session tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    OpenProject,
    NewProject,
    AuxTool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Running,
    Terminated,
}

/// Session transition after `action` finished with `outcome`.
pub fn next_state(action: ShellAction, outcome: &LaunchOutcome) -> SessionState {
    match (action, outcome) {
        (ShellAction::OpenProject | ShellAction::NewProject, LaunchOutcome::Launched) => {
            SessionState::Terminated
        }
        _ => SessionState::Running,
    }
}

/// Open a set with the OS default handler.
pub fn open_project(path: &Path) -> LaunchOutcome {
    // Handlers like xdg-open report success before noticing a missing file
    if !path.is_file() {
        return LaunchOutcome::LaunchFailed(format!(
            "Could not open '{}': file not found",
            path.display()
        ));
    }

    match open::that_detached(path) {
        Ok(()) => {
            info!("Opened set {:?}", path);
            LaunchOutcome::Launched
        }
        Err(e) => {
            LaunchOutcome::LaunchFailed(format!("Could not open '{}': {}", path.display(), e))
        }
    }
}

/// Show `dir` in the OS file browser. Failures are only logged.
pub fn open_folder(dir: &Path) {
    info!("Opening folder {:?}", dir);
    if let Err(e) = open::that_detached(dir) {
        warn!("Failed to open folder {:?}: {}", dir, e);
    }
}

/// Start `executable` with no arguments and detach from it.
///
/// `label` names the program in error messages.
pub fn spawn_detached(executable: &Path, label: &str) -> LaunchOutcome {
    let spawned = Command::new(executable)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(child) => {
            info!("Started {} from {:?} (pid {})", label, executable, child.id());
            LaunchOutcome::Launched
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => LaunchOutcome::LaunchFailed(
            format!("{} not found at: {}", label, executable.display()),
        ),
        Err(e) => LaunchOutcome::LaunchFailed(format!("Error opening {}: {}", label, e)),
    }
}
