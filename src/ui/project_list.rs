//! Project list and button bar.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::LauncherConfig;
use crate::scanner::{icon_size, ProjectEntry};

use super::dialogs::ActionError;
use super::icons::IconTextures;
use super::layout::icon_column_width;
use super::{
    LaunchAuxToolRequest, LaunchHostRequest, ListSelection, OpenFolderRequest,
    OpenProjectRequest, ProjectList,
};

/// Share of the button bar taken by "New Project" when "Flex Cfg" is shown
const NEW_PROJECT_WIDTH_SHARE: f32 = 0.75;

/// Buttons in the bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarButton {
    NewProject,
    AuxTool,
}

impl BarButton {
    fn label(self) -> &'static str {
        match self {
            BarButton::NewProject => "New Project",
            BarButton::AuxTool => "Flex Cfg",
        }
    }
}

/// Buttons offered for this configuration, left to right.
pub fn offered_buttons(config: &LauncherConfig) -> Vec<BarButton> {
    let mut buttons = vec![BarButton::NewProject];
    if config.aux_tool.is_some() {
        buttons.push(BarButton::AuxTool);
    }
    buttons
}

/// Bottom bar with "New Project" and, when configured, "Flex Cfg".
pub fn button_bar_ui(
    mut contexts: EguiContexts,
    config: Res<LauncherConfig>,
    action_error: Res<ActionError>,
    mut host_events: MessageWriter<LaunchHostRequest>,
    mut aux_events: MessageWriter<LaunchAuxToolRequest>,
) -> Result {
    let buttons = offered_buttons(&config);
    let row_height = config.row_height as f32;

    egui::TopBottomPanel::bottom("button_bar").show(contexts.ctx_mut()?, |ui| {
        ui.add_space(8.0);
        ui.add_enabled_ui(!action_error.is_open(), |ui| {
            ui.horizontal(|ui| {
                let spacing = ui.spacing().item_spacing.x;
                let total = ui.available_width() - spacing * (buttons.len() - 1) as f32;

                for &button in &buttons {
                    let width = match (button, buttons.len()) {
                        (_, 1) => total,
                        (BarButton::NewProject, _) => total * NEW_PROJECT_WIDTH_SHARE,
                        (BarButton::AuxTool, _) => total * (1.0 - NEW_PROJECT_WIDTH_SHARE),
                    };
                    let clicked = ui
                        .add_sized([width, row_height], egui::Button::new(button.label()))
                        .clicked();
                    if !clicked {
                        continue;
                    }
                    match button {
                        BarButton::NewProject => {
                            host_events.write(LaunchHostRequest);
                        }
                        BarButton::AuxTool => {
                            aux_events.write(LaunchAuxToolRequest);
                        }
                    }
                }
            });
        });
        ui.add_space(8.0);
    });
    Ok(())
}

/// Central list of sets, newest first.
///
/// Double-click (or Enter) opens a set, right-click shows its folder.
#[allow(clippy::too_many_arguments)]
pub fn project_list_ui(
    mut contexts: EguiContexts,
    config: Res<LauncherConfig>,
    projects: Res<ProjectList>,
    icons: Res<IconTextures>,
    action_error: Res<ActionError>,
    mut selection: ResMut<ListSelection>,
    mut open_events: MessageWriter<OpenProjectRequest>,
    mut folder_events: MessageWriter<OpenFolderRequest>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let dialog_open = action_error.is_open();

    if !dialog_open
        && ctx.input(|i| i.key_pressed(egui::Key::Enter))
        && let Some(row) = selection.row
    {
        open_events.write(OpenProjectRequest { row });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        if projects.is_empty() {
            ui.label(format!("No sets found in {}", config.projects_root.display()));
            return;
        }

        ui.add_enabled_ui(!dialog_open, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = 0.0;
                    for (row, entry) in projects.iter().enumerate() {
                        let response = render_row(
                            ui,
                            entry,
                            icons.texture_id(row),
                            config.row_height,
                            selection.row == Some(row),
                        );

                        if response.clicked() || response.secondary_clicked() {
                            selection.row = Some(row);
                        }
                        if response.double_clicked() {
                            open_events.write(OpenProjectRequest { row });
                        }
                        if response.secondary_clicked() {
                            folder_events.write(OpenFolderRequest { row });
                        }
                    }
                });
        });
    });
    Ok(())
}

/// One row: icon column followed by the set name.
fn render_row(
    ui: &mut egui::Ui,
    entry: &ProjectEntry,
    texture: Option<egui::TextureId>,
    row_height: u32,
    is_selected: bool,
) -> egui::Response {
    let height = row_height as f32;
    let column = egui::vec2(icon_column_width(row_height) as f32, height);
    let side = icon_size(row_height) as f32;

    ui.horizontal(|ui| {
        ui.set_min_height(height);

        if let Some(texture_id) = texture {
            ui.add_sized(
                column,
                egui::Image::new(egui::load::SizedTexture::new(
                    texture_id,
                    egui::vec2(side, side),
                ))
                .fit_to_exact_size(egui::vec2(side, side)),
            );
        } else {
            ui.add_space(column.x);
        }

        ui.selectable_label(is_selected, format!(" {}", entry.name()))
            .on_hover_text(entry.path.display().to_string())
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(aux_tool: Option<&str>) -> LauncherConfig {
        LauncherConfig {
            row_height: 30,
            dark_mode: true,
            projects_root: PathBuf::from("/music"),
            host_executable: PathBuf::from("/opt/live/Live"),
            aux_tool: aux_tool.map(PathBuf::from),
        }
    }

    #[test]
    fn test_aux_tool_hidden_without_config() {
        assert_eq!(offered_buttons(&config(None)), vec![BarButton::NewProject]);
    }

    #[test]
    fn test_aux_tool_offered_when_configured() {
        assert_eq!(
            offered_buttons(&config(Some("/opt/flex/FlexGUI"))),
            vec![BarButton::NewProject, BarButton::AuxTool]
        );
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(BarButton::NewProject.label(), "New Project");
        assert_eq!(BarButton::AuxTool.label(), "Flex Cfg");
    }
}
