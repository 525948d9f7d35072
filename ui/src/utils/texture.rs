//! Uploading pixel buffers as egui textures.

use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use qrstudio_business::ImageData;

/// Convert a raw buffer into an egui [`ColorImage`], if its byte count
/// matches its dimensions.
pub fn color_image(image: &ImageData) -> Option<ColorImage> {
    let size = [image.width, image.height];
    match image.bytes_per_pixel()? {
        4 => Some(ColorImage::from_rgba_unmultiplied(size, &image.bytes)),
        3 => Some(ColorImage::from_rgb(size, &image.bytes)),
        _ => None,
    }
}

/// Upload `image` as a named texture. `None` if the buffer is inconsistent.
pub fn upload(ctx: &Context, name: &str, image: &ImageData) -> Option<TextureHandle> {
    let color = color_image(image)?;
    Some(ctx.load_texture(name, color, TextureOptions::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_image_shapes() {
        assert!(color_image(&ImageData::new(2, 2, vec![0; 16])).is_some());
        assert!(color_image(&ImageData::new(2, 2, vec![0; 12])).is_some());
        assert!(color_image(&ImageData::new(2, 2, vec![0; 5])).is_none());
    }
}
