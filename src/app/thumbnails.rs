//! Thumbnail loading from the local thumbnail directory

use super::App;
use eframe::egui;
use tracing::{debug, warn};

impl App {
    /// Texture for a thumbnail file name, decoded once and cached. Missing or
    /// unreadable files are cached as `None` so the card draws a placeholder.
    pub fn load_thumbnail(
        &mut self,
        ctx: &egui::Context,
        file_name: &str,
    ) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.thumbnail_cache.get(file_name) {
            return cached.clone();
        }

        let path = self.thumbnail_dir.join(file_name);
        let texture = if path.exists() {
            match image::open(&path) {
                Ok(img) => {
                    let rgba = img.to_rgba8();
                    let size = [rgba.width() as usize, rgba.height() as usize];
                    let pixels = rgba.into_raw();
                    debug!(path = %path.display(), "Thumbnail loaded");
                    Some(ctx.load_texture(
                        file_name,
                        egui::ColorImage::from_rgba_unmultiplied(size, &pixels),
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to decode thumbnail");
                    None
                }
            }
        } else {
            None
        };

        self.thumbnail_cache
            .insert(file_name.to_string(), texture.clone());
        texture
    }
}
