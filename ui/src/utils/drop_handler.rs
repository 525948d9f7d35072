//! Drag-and-drop image files.
//!
//! Native gets file paths from winit; the web build gets the file bytes
//! from the browser. Either way the first loadable image wins.

use egui::Context;
use qrstudio_business::ImageData;

use super::image_load;

/// Drop capability, mockable for tests.
pub trait DropHandler {
    /// The dropped image, if any image file was dropped this frame.
    fn handle_drop(&self, ctx: &Context) -> Option<ImageData>;
}

/// Production handler over egui's dropped-file events.
#[derive(Default)]
pub struct SystemDropHandler;

impl DropHandler for SystemDropHandler {
    fn handle_drop(&self, ctx: &Context) -> Option<ImageData> {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped_files.is_empty() {
            return None;
        }

        for file in &dropped_files {
            if let Some(image) = load_dropped_file(file) {
                log::debug!(
                    "dropped image {}x{} ({} bytes)",
                    image.width,
                    image.height,
                    image.bytes.len()
                );
                return Some(image);
            }
            log::warn!("dropped file {:?} is not a loadable image", file.name);
        }
        None
    }
}

fn load_dropped_file(file: &egui::DroppedFile) -> Option<ImageData> {
    #[cfg(not(target_arch = "wasm32"))]
    if let Some(path) = &file.path {
        return image_load::load_image_from_path(path);
    }
    if let Some(bytes) = &file.bytes {
        return image_load::load_image_from_bytes(bytes);
    }
    None
}
