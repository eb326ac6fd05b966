use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// Failure of the last user action, shown until dismissed.
#[derive(Resource, Default)]
pub struct ActionError {
    pub message: Option<String>,
}

impl ActionError {
    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }
}

/// Renders the action error dialog. The launcher keeps running afterwards.
pub fn action_error_dialog_ui(
    mut contexts: EguiContexts,
    mut action_error: ResMut<ActionError>,
) -> Result {
    let Some(message) = action_error.message.clone() else {
        return Ok(());
    };

    let ctx = contexts.ctx_mut()?;
    let mut dismissed = ctx.input(|i| i.key_pressed(egui::Key::Escape));

    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        action_error.message = None;
    }
    Ok(())
}
