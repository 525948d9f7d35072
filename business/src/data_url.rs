//! PNG data-URL codec.
//!
//! History entries carry their source image as an opaque reference; here
//! that reference is a `data:image/png;base64,...` string, so it survives
//! serialization with the rest of the entry and can be turned back into
//! pixels for redisplay. Failures are logged and collapse to `None` — a
//! history entry without a redisplayable image is still a valid entry.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::image_data::ImageData;

const PNG_PREFIX: &str = "data:image/png;base64,";

/// Encode a pixel buffer as a PNG data URL.
pub fn image_to_png_data_url(image: &ImageData) -> Option<String> {
    let rgba = to_rgba(image)?;
    let mut bytes = Vec::new();
    if let Err(err) =
        DynamicImage::ImageRgba8(rgba).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
    {
        log::warn!("failed to encode image reference: {err}");
        return None;
    }
    Some(format!("{PNG_PREFIX}{}", STANDARD.encode(&bytes)))
}

/// Decode a PNG data URL back into a pixel buffer.
pub fn image_from_data_url(url: &str) -> Option<ImageData> {
    let encoded = url.strip_prefix(PNG_PREFIX)?;
    let bytes = match STANDARD.decode(encoded) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("image reference is not valid base64: {err}");
            return None;
        }
    };
    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(err) => {
            log::warn!("image reference is not a decodable image: {err}");
            return None;
        }
    };
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Some(ImageData::new(
        width as usize,
        height as usize,
        rgba.into_raw(),
    ))
}

fn to_rgba(image: &ImageData) -> Option<RgbaImage> {
    match image.bytes_per_pixel() {
        Some(4) => RgbaImage::from_raw(
            image.width as u32,
            image.height as u32,
            image.bytes.clone(),
        ),
        Some(3) => {
            let rgba: Vec<u8> = image
                .bytes
                .chunks_exact(3)
                .flat_map(|px| [px[0], px[1], px[2], 255])
                .collect();
            RgbaImage::from_raw(image.width as u32, image.height as u32, rgba)
        }
        _ => {
            log::warn!(
                "refusing to encode image reference: {}x{} with {} bytes",
                image.width,
                image.height,
                image.bytes.len()
            );
            None
        }
    }
}
