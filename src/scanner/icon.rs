//! Project icon lookup and decoding.

use bevy::log::warn;
use image::imageops::FilterType;
use image::{ImageReader, RgbaImage};
use std::path::{Path, PathBuf};

use crate::constants::{ICON_SIZE_FACTOR, PROJECT_ICON_FILE, PROJECT_INFO_DIR};

/// Icon side length in pixels for a given row height.
pub fn icon_size(row_height: u32) -> u32 {
    (f64::from(row_height) * ICON_SIZE_FACTOR).floor() as u32
}

/// Where Live keeps the icon for the set at `project`.
pub fn icon_path_for(project: &Path) -> PathBuf {
    project
        .parent()
        .unwrap_or(Path::new(""))
        .join(PROJECT_INFO_DIR)
        .join(PROJECT_ICON_FILE)
}

/// Load the icon next to `project`, resized to a `size` x `size` square.
///
/// Returns `None` when the set has no icon or it cannot be decoded; decode
/// failures are logged and never abort a scan.
pub fn load_icon(project: &Path, size: u32) -> Option<RgbaImage> {
    let path = icon_path_for(project);
    if size == 0 || !path.is_file() {
        return None;
    }

    match decode_resized(&path, size) {
        Ok(icon) => Some(icon),
        Err(e) => {
            warn!("Error loading icon {:?}: {}", path, e);
            None
        }
    }
}

fn decode_resized(path: &Path, size: u32) -> image::ImageResult<RgbaImage> {
    // Sniff the format: some tools write PNG data under the .ICO name
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image::imageops::resize(&image, size, size, FilterType::Lanczos3))
}
