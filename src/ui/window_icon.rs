//! Taskbar and title bar icon for the launcher window.

use bevy::ecs::system::NonSendMarker;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy::winit::WINIT_WINDOWS;
use image::{ImageReader, RgbaImage};
use std::io::Cursor;
use winit::window::Icon;

const WINDOW_ICON_BYTES: &[u8] = include_bytes!("../../packaging/icons/icon.ico");

/// Decoded icon waiting for the native window to exist.
#[derive(Resource)]
pub struct PendingWindowIcon(RgbaImage);

/// Decode icon file bytes, sniffing the format.
pub fn decode_window_icon(bytes: &[u8]) -> image::ImageResult<RgbaImage> {
    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;
    Ok(image.to_rgba8())
}

/// Startup system: decode the bundled icon. A broken icon only costs the
/// default one.
pub fn load_window_icon(mut commands: Commands) {
    match decode_window_icon(WINDOW_ICON_BYTES) {
        Ok(icon) => {
            debug!("Decoded window icon ({}x{})", icon.width(), icon.height());
            commands.insert_resource(PendingWindowIcon(icon));
        }
        Err(e) => warn!("Failed to decode window icon: {}", e),
    }
}

/// Hand the icon to winit once the primary window has been created.
pub fn apply_window_icon(
    mut commands: Commands,
    pending: Res<PendingWindowIcon>,
    windows: Query<Entity, With<PrimaryWindow>>,
    _main_thread: NonSendMarker,
) {
    let Ok(entity) = windows.single() else {
        return;
    };

    let applied = WINIT_WINDOWS.with_borrow(|winit_windows| {
        let Some(window) = winit_windows.get_window(entity) else {
            return false;
        };
        let icon = &pending.0;
        match Icon::from_rgba(icon.as_raw().clone(), icon.width(), icon.height()) {
            Ok(icon) => window.set_window_icon(Some(icon)),
            Err(e) => warn!("Window icon rejected: {}", e),
        }
        true
    });

    if applied {
        commands.remove_resource::<PendingWindowIcon>();
    }
}
