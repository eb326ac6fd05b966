//! Window sizing derived from the row height and the longest set name.

use bevy::prelude::*;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowPosition};
use bevy_egui::{egui, EguiContexts};

use crate::config::LauncherConfig;
use crate::constants::{
    FONT_REFERENCE_ROW_HEIGHT, FONT_SIZE_BASE, ICON_COLUMN_FACTOR, WINDOW_HEIGHT_OFFSET,
    WINDOW_PADDING, WINDOW_ROW_COUNT,
};

use super::ProjectList;

/// Window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMetrics {
    pub width: u32,
    pub height: u32,
}

/// List font size in points.
pub fn font_size(row_height: u32) -> f32 {
    (f64::from(row_height) * FONT_SIZE_BASE / FONT_REFERENCE_ROW_HEIGHT).floor() as f32
}

/// Width of the icon column.
pub fn icon_column_width(row_height: u32) -> u32 {
    (f64::from(row_height) * ICON_COLUMN_FACTOR).floor() as u32
}

/// Window size for a list whose widest name renders `text_width` pixels wide.
///
/// `row_height` is bounded by config validation, so the arithmetic cannot
/// overflow.
pub fn window_metrics(row_height: u32, text_width: f32) -> WindowMetrics {
    let text_width = text_width.max(0.0).ceil() as u32;
    WindowMetrics {
        width: icon_column_width(row_height) + text_width + WINDOW_PADDING,
        height: row_height * WINDOW_ROW_COUNT + WINDOW_HEIGHT_OFFSET,
    }
}

/// The name with the most characters; the first one wins a tie.
pub fn longest_name<'a>(names: impl IntoIterator<Item = &'a str>) -> &'a str {
    names.into_iter().fold("", |longest, name| {
        if name.chars().count() > longest.chars().count() {
            name
        } else {
            longest
        }
    })
}

/// Tracks whether the window has been sized to its content yet.
#[derive(Resource, Default)]
pub struct WindowFit {
    pub applied: bool,
}

/// First egui pass: measure the longest name, resize, center and show the
/// window. The window starts hidden so the user never sees it jump.
pub fn fit_window_to_list(
    mut contexts: EguiContexts,
    mut fit: ResMut<WindowFit>,
    config: Res<LauncherConfig>,
    projects: Res<ProjectList>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) -> Result {
    if fit.applied {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;
    let names = projects.names();
    let longest = longest_name(names.iter().map(String::as_str));
    // Rows render the name with a leading space
    let text_width = ctx
        .layer_painter(egui::LayerId::background())
        .layout_no_wrap(
            format!(" {}", longest),
            egui::FontId::proportional(font_size(config.row_height)),
            egui::Color32::WHITE,
        )
        .size()
        .x;

    let metrics = window_metrics(config.row_height, text_width);

    let mut window = windows.single_mut()?;
    window
        .resolution
        .set(metrics.width as f32, metrics.height as f32);
    window.position = WindowPosition::Centered(MonitorSelection::Primary);
    window.visible = true;

    fit.applied = true;
    debug!(
        "Sized window to {}x{} for {:?}",
        metrics.width, metrics.height, longest
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_ROW_HEIGHT;

    #[test]
    fn test_font_size_scales_with_row_height() {
        assert_eq!(font_size(30), 16.0);
        assert_eq!(font_size(45), 24.0);
        assert_eq!(font_size(40), 21.0);
    }

    #[test]
    fn test_icon_column_width() {
        assert_eq!(icon_column_width(30), 39);
        assert_eq!(icon_column_width(40), 52);
    }

    #[test]
    fn test_window_metrics() {
        let metrics = window_metrics(30, 300.4);
        assert_eq!(metrics.width, 39 + 301 + 20);
        assert_eq!(metrics.height, 30 * 8 + 50);
    }

    #[test]
    fn test_window_metrics_without_names() {
        let metrics = window_metrics(30, 0.0);
        assert_eq!(metrics.width, 39 + 20);
    }

    #[test]
    fn test_window_metrics_at_largest_row_height() {
        let metrics = window_metrics(MAX_ROW_HEIGHT, 1000.0);
        assert_eq!(metrics.width, 665 + 1000 + 20);
        assert_eq!(metrics.height, MAX_ROW_HEIGHT * 8 + 50);
    }

    #[test]
    fn test_longest_name_by_characters() {
        assert_eq!(longest_name(["ab", "abcd", "abc"]), "abcd");
        assert_eq!(longest_name(["same", "four"]), "same");
        assert_eq!(longest_name(["ééé", "abcd"]), "abcd");
        assert_eq!(longest_name(Vec::<&str>::new()), "");
    }
}
