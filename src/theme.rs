//! Centralized color theme for the launcher.
//!
//! The dark palette matches the grey-on-charcoal look the launcher always
//! had; the light theme is egui's stock light visuals. Theming is applied
//! once at startup and has no effect beyond appearance.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Dark Palette
// ============================================================================

/// Window and list background
pub const DARK_BACKGROUND: Color = Color::srgb(0.176, 0.176, 0.176);

/// Buttons and input fields
pub const DARK_WIDGET: Color = Color::srgb(0.259, 0.259, 0.259);

/// Button hover
pub const DARK_WIDGET_HOVER: Color = Color::srgb(0.4, 0.4, 0.4);

/// Widget borders
pub const DARK_BORDER: Color = Color::srgb(0.38, 0.38, 0.38);

/// Selected list row
pub const DARK_SELECTION: Color = Color::srgb(0.29, 0.29, 0.29);

/// Regular text
pub const DARK_TEXT: Color = Color::srgb(0.933, 0.933, 0.933);

/// Background behind egui for the light theme
pub const LIGHT_BACKGROUND: Color = Color::srgb(0.973, 0.973, 0.973);

// ============================================================================
// Visuals
// ============================================================================

/// Background the renderer clears to, so the first frame matches the theme.
pub fn clear_color(dark: bool) -> Color {
    if dark {
        DARK_BACKGROUND
    } else {
        LIGHT_BACKGROUND
    }
}

/// egui visuals for the configured theme.
pub fn launcher_visuals(dark: bool) -> egui::Visuals {
    if !dark {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = bevy_to_egui_opaque(LIGHT_BACKGROUND);
        return visuals;
    }

    let background = bevy_to_egui_opaque(DARK_BACKGROUND);
    let widget = bevy_to_egui_opaque(DARK_WIDGET);
    let hover = bevy_to_egui_opaque(DARK_WIDGET_HOVER);
    let border = egui::Stroke::new(1.0, bevy_to_egui_opaque(DARK_BORDER));
    let text = bevy_to_egui_opaque(DARK_TEXT);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = background;
    visuals.window_fill = background;
    visuals.extreme_bg_color = widget;
    visuals.faint_bg_color = background;
    visuals.override_text_color = Some(text);

    visuals.widgets.inactive.bg_fill = widget;
    visuals.widgets.inactive.weak_bg_fill = widget;
    visuals.widgets.inactive.bg_stroke = border;
    visuals.widgets.hovered.bg_fill = hover;
    visuals.widgets.hovered.weak_bg_fill = hover;
    visuals.widgets.active.bg_fill = hover;
    visuals.widgets.active.weak_bg_fill = hover;

    visuals.selection.bg_fill = bevy_to_egui_opaque(DARK_SELECTION);
    visuals.selection.stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    visuals
}

/// Apply theme and font size to the egui context.
pub fn apply_theme(ctx: &egui::Context, dark: bool, font_size: f32) {
    ctx.set_visuals(launcher_visuals(dark));
    ctx.style_mut(|style| {
        for text_style in [
            egui::TextStyle::Body,
            egui::TextStyle::Button,
            egui::TextStyle::Heading,
        ] {
            style
                .text_styles
                .insert(text_style, egui::FontId::proportional(font_size));
        }
    });
}

// ============================================================================
// Color Conversion Utilities
// ============================================================================

/// Convert a Bevy Color to egui Color32 (fully opaque)
pub fn bevy_to_egui_opaque(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgb(
        (srgba.red * 255.0).round() as u8,
        (srgba.green * 255.0).round() as u8,
        (srgba.blue * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_background_is_2d2d2d() {
        assert_eq!(
            bevy_to_egui_opaque(DARK_BACKGROUND),
            egui::Color32::from_rgb(0x2D, 0x2D, 0x2D)
        );
    }

    #[test]
    fn test_dark_visuals_override_text() {
        let visuals = launcher_visuals(true);
        assert!(visuals.dark_mode);
        assert_eq!(
            visuals.override_text_color,
            Some(egui::Color32::from_rgb(0xEE, 0xEE, 0xEE))
        );
    }

    #[test]
    fn test_light_visuals() {
        let visuals = launcher_visuals(false);
        assert!(!visuals.dark_mode);
        assert!(visuals.override_text_color.is_none());
    }

    #[test]
    fn test_clear_color_follows_theme() {
        assert_eq!(clear_color(true), DARK_BACKGROUND);
        assert_eq!(clear_color(false), LIGHT_BACKGROUND);
    }
}
