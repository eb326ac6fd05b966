//! The launcher window: project list, button bar and error dialog.
//!
//! ## Module Structure
//!
//! - [`icons`] - Converts decoded project icons into egui textures
//! - [`layout`] - Window metrics and the first-frame window fit
//! - [`project_list`] - List and button bar rendering
//! - [`actions`] - Message handlers that talk to the OS
//! - [`dialogs`] - Recoverable error dialog
//! - [`window_icon`] - Taskbar and title bar icon
//!
//! The widgets never own project data: rows are drawn from [`ProjectList`]
//! and a click is resolved back through the row index.

mod actions;
mod dialogs;
mod icons;
mod layout;
mod project_list;
mod window_icon;

pub use layout::{font_size, window_metrics};

use actions::LauncherSession;
use dialogs::ActionError;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass};

use crate::config::LauncherConfig;
use crate::scanner::ProjectEntry;
use crate::theme;

/// Scanned sets in display order. Built once, never mutated.
#[derive(Resource, Default)]
pub struct ProjectList {
    entries: Vec<ProjectEntry>,
}

impl ProjectList {
    pub fn new(entries: Vec<ProjectEntry>) -> Self {
        Self { entries }
    }

    /// Entry shown at `row`, if the row exists.
    pub fn get(&self, row: usize) -> Option<&ProjectEntry> {
        self.entries.get(row)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(ProjectEntry::name).collect()
    }
}

/// Currently highlighted row.
#[derive(Resource, Default)]
pub struct ListSelection {
    pub row: Option<usize>,
}

/// Request to open the set at a row with its default handler
#[derive(Message)]
pub struct OpenProjectRequest {
    pub row: usize,
}

/// Request to show the folder of the set at a row
#[derive(Message)]
pub struct OpenFolderRequest {
    pub row: usize,
}

/// Request to start Ableton Live for a new project
#[derive(Message)]
pub struct LaunchHostRequest;

/// Request to start the auxiliary configuration tool
#[derive(Message)]
pub struct LaunchAuxToolRequest;

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Apply theme and fonts once the egui context exists.
fn apply_theme_once(
    mut contexts: EguiContexts,
    config: Res<LauncherConfig>,
    mut applied: Local<bool>,
) -> Result {
    if *applied {
        return Ok(());
    }
    theme::apply_theme(
        contexts.ctx_mut()?,
        config.dark_mode,
        font_size(config.row_height),
    );
    *applied = true;
    Ok(())
}

pub struct ShellPlugin;

impl Plugin for ShellPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ListSelection>()
            .init_resource::<ActionError>()
            .init_resource::<LauncherSession>()
            .init_resource::<layout::WindowFit>()
            .add_message::<OpenProjectRequest>()
            .add_message::<OpenFolderRequest>()
            .add_message::<LaunchHostRequest>()
            .add_message::<LaunchAuxToolRequest>()
            .add_systems(
                Startup,
                (
                    setup_camera,
                    icons::register_icon_textures,
                    window_icon::load_window_icon,
                ),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Style and size first so the list renders with final fonts
                    apply_theme_once,
                    layout::fit_window_to_list,
                    project_list::button_bar_ui,
                    project_list::project_list_ui,
                    dialogs::action_error_dialog_ui,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    actions::handle_open_project.run_if(on_message::<OpenProjectRequest>),
                    actions::handle_open_folder.run_if(on_message::<OpenFolderRequest>),
                    actions::handle_launch_host.run_if(on_message::<LaunchHostRequest>),
                    actions::handle_launch_aux_tool.run_if(on_message::<LaunchAuxToolRequest>),
                    actions::end_session.run_if(resource_changed::<LauncherSession>),
                )
                    .chain(),
            )
            .add_systems(
                Update,
                window_icon::apply_window_icon
                    .run_if(resource_exists::<window_icon::PendingWindowIcon>),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{Duration, UNIX_EPOCH};

    fn entry(path: &str, secs: u64) -> ProjectEntry {
        ProjectEntry {
            modified: UNIX_EPOCH + Duration::from_secs(secs),
            path: PathBuf::from(path),
            icon: None,
        }
    }

    #[test]
    fn test_rows_resolve_to_entries() {
        let list = ProjectList::new(vec![
            entry("/m/b/song2.als", 2),
            entry("/m/a/song1.als", 1),
        ]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().name(), "song2");
        assert_eq!(list.get(1).unwrap().name(), "song1");
        assert!(list.get(2).is_none());
    }

    #[test]
    fn test_names_in_display_order() {
        let list = ProjectList::new(vec![entry("/m/x.als", 9), entry("/m/y.als", 3)]);
        assert_eq!(list.names(), vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_empty_list() {
        let list = ProjectList::default();
        assert!(list.is_empty());
        assert!(list.names().is_empty());
    }
}
