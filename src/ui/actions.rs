//! Handlers for list and button actions.
//!
//! Each handler resolves its request, hands it to the OS via
//! [`crate::launcher`] and settles the outcome on [`LauncherSession`].

use bevy::prelude::*;

use crate::config::LauncherConfig;
use crate::launcher::{self, next_state, LaunchOutcome, SessionState, ShellAction};

use super::dialogs::ActionError;
use super::{
    LaunchAuxToolRequest, LaunchHostRequest, OpenFolderRequest, OpenProjectRequest, ProjectList,
};

const HOST_LABEL: &str = "Ableton Live";
const AUX_TOOL_LABEL: &str = "Flex GUI";

/// Launcher session: running until a set opens or Live starts.
#[derive(Resource, Default)]
pub struct LauncherSession {
    pub state: SessionState,
}

impl LauncherSession {
    /// Apply the outcome of `action`. Failures are queued for the error
    /// dialog; a terminated session never resumes.
    pub fn settle(
        &mut self,
        action: ShellAction,
        outcome: &LaunchOutcome,
        error: &mut ActionError,
    ) {
        if self.state == SessionState::Terminated {
            return;
        }
        if let LaunchOutcome::LaunchFailed(reason) = outcome {
            warn!("{:?} failed: {}", action, reason);
            error.message = Some(reason.clone());
        }
        self.state = next_state(action, outcome);
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }
}

pub fn handle_open_project(
    mut requests: MessageReader<OpenProjectRequest>,
    projects: Res<ProjectList>,
    mut session: ResMut<LauncherSession>,
    mut action_error: ResMut<ActionError>,
) {
    for request in requests.read() {
        let Some(entry) = projects.get(request.row) else {
            warn!("Ignoring open request for unknown row {}", request.row);
            continue;
        };
        let outcome = launcher::open_project(&entry.path);
        session.settle(ShellAction::OpenProject, &outcome, &mut action_error);
        if session.is_terminated() {
            break;
        }
    }
}

pub fn handle_open_folder(
    mut requests: MessageReader<OpenFolderRequest>,
    projects: Res<ProjectList>,
) {
    for request in requests.read() {
        match projects.get(request.row) {
            Some(entry) => launcher::open_folder(entry.directory()),
            None => warn!("Ignoring folder request for unknown row {}", request.row),
        }
    }
}

pub fn handle_launch_host(
    mut requests: MessageReader<LaunchHostRequest>,
    config: Res<LauncherConfig>,
    mut session: ResMut<LauncherSession>,
    mut action_error: ResMut<ActionError>,
) {
    // Repeated clicks within a frame start Live once
    if requests.read().count() == 0 {
        return;
    }
    let outcome = launcher::spawn_detached(&config.host_executable, HOST_LABEL);
    session.settle(ShellAction::NewProject, &outcome, &mut action_error);
}

pub fn handle_launch_aux_tool(
    mut requests: MessageReader<LaunchAuxToolRequest>,
    config: Res<LauncherConfig>,
    mut session: ResMut<LauncherSession>,
    mut action_error: ResMut<ActionError>,
) {
    if requests.read().count() == 0 {
        return;
    }
    let Some(tool) = config.aux_tool.as_ref() else {
        warn!("Auxiliary tool requested but none is configured");
        return;
    };
    let outcome = launcher::spawn_detached(tool, AUX_TOOL_LABEL);
    session.settle(ShellAction::AuxTool, &outcome, &mut action_error);
}

/// Leave the event loop once the session has terminated.
pub fn end_session(session: Res<LauncherSession>, mut exit: MessageWriter<AppExit>) {
    if session.is_terminated() {
        info!("Session finished, closing launcher");
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::ProjectEntry;
    use std::time::SystemTime;

    fn test_config(dir: &std::path::Path) -> LauncherConfig {
        LauncherConfig {
            row_height: 30,
            dark_mode: false,
            projects_root: dir.to_path_buf(),
            host_executable: dir.join("missing-live"),
            aux_tool: None,
        }
    }

    fn test_app(config: LauncherConfig, entries: Vec<ProjectEntry>) -> App {
        let mut app = App::new();
        app.insert_resource(ProjectList::new(entries))
            .insert_resource(config)
            .init_resource::<LauncherSession>()
            .init_resource::<ActionError>()
            .add_message::<OpenProjectRequest>()
            .add_message::<OpenFolderRequest>()
            .add_message::<LaunchHostRequest>()
            .add_message::<LaunchAuxToolRequest>()
            .add_systems(
                Update,
                (
                    handle_open_project.run_if(on_message::<OpenProjectRequest>),
                    handle_open_folder.run_if(on_message::<OpenFolderRequest>),
                    handle_launch_host.run_if(on_message::<LaunchHostRequest>),
                    handle_launch_aux_tool.run_if(on_message::<LaunchAuxToolRequest>),
                    end_session.run_if(resource_changed::<LauncherSession>),
                )
                    .chain(),
            );
        app
    }

    #[test]
    fn test_settle_failure_sets_error_and_keeps_running() {
        let mut session = LauncherSession::default();
        let mut error = ActionError::default();
        session.settle(
            ShellAction::NewProject,
            &LaunchOutcome::LaunchFailed("Ableton Live not found".into()),
            &mut error,
        );
        assert_eq!(session.state, SessionState::Running);
        assert_eq!(error.message.as_deref(), Some("Ableton Live not found"));
    }

    #[test]
    fn test_settle_success_terminates_and_stays_terminated() {
        let mut session = LauncherSession::default();
        let mut error = ActionError::default();
        session.settle(ShellAction::OpenProject, &LaunchOutcome::Launched, &mut error);
        assert!(session.is_terminated());

        session.settle(
            ShellAction::AuxTool,
            &LaunchOutcome::LaunchFailed("late".into()),
            &mut error,
        );
        assert!(session.is_terminated());
        assert!(!error.is_open());
    }

    #[test]
    fn test_opening_deleted_set_shows_error_and_keeps_list() {
        let dir = tempfile::tempdir().unwrap();
        let entry = ProjectEntry {
            modified: SystemTime::now(),
            path: dir.path().join("Deleted Project/Deleted.als"),
            icon: None,
        };
        let mut app = test_app(test_config(dir.path()), vec![entry]);

        app.world_mut().write_message(OpenProjectRequest { row: 0 });
        app.update();

        let error = app.world().resource::<ActionError>();
        assert!(error.message.as_deref().unwrap().contains("not found"));
        assert!(!app.world().resource::<LauncherSession>().is_terminated());
        assert_eq!(app.world().resource::<ProjectList>().len(), 1);
    }

    #[test]
    fn test_unknown_row_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(test_config(dir.path()), Vec::new());

        app.world_mut().write_message(OpenProjectRequest { row: 3 });
        app.update();

        assert!(!app.world().resource::<ActionError>().is_open());
        assert!(!app.world().resource::<LauncherSession>().is_terminated());
    }

    #[test]
    fn test_missing_host_executable_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(test_config(dir.path()), Vec::new());

        app.world_mut().write_message(LaunchHostRequest);
        app.update();

        let error = app.world().resource::<ActionError>();
        assert!(error.message.as_deref().unwrap().starts_with(HOST_LABEL));
        assert!(!app.world().resource::<LauncherSession>().is_terminated());
        assert_eq!(app.should_exit(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_host_launch_ends_session_with_success() {
        let dir = tempfile::tempdir().unwrap();
        let config = LauncherConfig {
            host_executable: "/bin/true".into(),
            ..test_config(dir.path())
        };
        let mut app = test_app(config, Vec::new());

        app.world_mut().write_message(LaunchHostRequest);
        app.update();

        assert!(app.world().resource::<LauncherSession>().is_terminated());
        assert!(!app.world().resource::<ActionError>().is_open());
        assert_eq!(app.should_exit(), Some(AppExit::Success));
    }

    #[cfg(unix)]
    #[test]
    fn test_aux_tool_launch_keeps_session_running() {
        let dir = tempfile::tempdir().unwrap();
        let config = LauncherConfig {
            aux_tool: Some("/bin/true".into()),
            ..test_config(dir.path())
        };
        let mut app = test_app(config, Vec::new());

        app.world_mut().write_message(LaunchAuxToolRequest);
        app.update();

        assert!(!app.world().resource::<LauncherSession>().is_terminated());
        assert!(!app.world().resource::<ActionError>().is_open());
        assert_eq!(app.should_exit(), None);
    }

    #[test]
    fn test_missing_aux_tool_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let config = LauncherConfig {
            aux_tool: Some(dir.path().join("no-flex")),
            ..test_config(dir.path())
        };
        let mut app = test_app(config, Vec::new());

        app.world_mut().write_message(LaunchAuxToolRequest);
        app.update();

        let error = app.world().resource::<ActionError>();
        assert!(error.message.as_deref().unwrap().starts_with(AUX_TOOL_LABEL));
        assert!(!app.world().resource::<LauncherSession>().is_terminated());
        assert_eq!(app.should_exit(), None);
    }

    #[test]
    fn test_folder_request_for_unknown_row_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(test_config(dir.path()), Vec::new());

        app.world_mut().write_message(OpenFolderRequest { row: 5 });
        app.update();

        assert!(!app.world().resource::<ActionError>().is_open());
        assert!(!app.world().resource::<LauncherSession>().is_terminated());
        assert_eq!(app.should_exit(), None);
    }
}
