//! Project icon textures for the list.

use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy_egui::{egui, EguiTextureHandle, EguiUserTextures};
use image::RgbaImage;

use super::ProjectList;

/// egui texture per list row; `None` where the set has no icon.
#[derive(Resource, Default)]
pub struct IconTextures {
    /// Keeps the images alive while egui references them weakly
    handles: Vec<Handle<Image>>,
    texture_ids: Vec<Option<egui::TextureId>>,
}

impl IconTextures {
    pub fn texture_id(&self, row: usize) -> Option<egui::TextureId> {
        self.texture_ids.get(row).copied().flatten()
    }
}

/// Convert a decoded icon into a Bevy image.
pub fn icon_to_image(icon: &RgbaImage) -> Image {
    Image::new(
        Extent3d {
            width: icon.width(),
            height: icon.height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        icon.as_raw().clone(),
        TextureFormat::Rgba8UnormSrgb,
        default(),
    )
}

/// Startup system that uploads every icon once and registers it with egui.
pub fn register_icon_textures(
    mut commands: Commands,
    projects: Res<ProjectList>,
    mut images: ResMut<Assets<Image>>,
    mut egui_textures: ResMut<EguiUserTextures>,
) {
    let mut textures = IconTextures::default();

    for entry in projects.iter() {
        let texture_id = entry.icon.as_ref().map(|icon| {
            let handle = images.add(icon_to_image(icon));
            let id = egui_textures.add_image(EguiTextureHandle::Weak(handle.id()));
            textures.handles.push(handle);
            id
        });
        textures.texture_ids.push(texture_id);
    }

    info!(
        "Registered {} of {} project icons",
        textures.handles.len(),
        projects.len()
    );
    commands.insert_resource(textures);
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_icon_to_image_keeps_size_and_pixels() {
        let icon = RgbaImage::from_pixel(24, 24, Rgba([10, 20, 30, 255]));
        let image = icon_to_image(&icon);
        assert_eq!(image.width(), 24);
        assert_eq!(image.height(), 24);
        assert_eq!(image.data.as_ref().map(Vec::len), Some(24 * 24 * 4));
    }

    #[test]
    fn test_missing_rows_have_no_texture() {
        let textures = IconTextures::default();
        assert!(textures.texture_id(0).is_none());
    }
}
