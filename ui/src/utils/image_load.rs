//! Decoding image files into raw pixel buffers.
//!
//! Shared by the drop handler and the file picker; every failure is logged
//! and collapses to `None`, the caller decides whether to surface it.

use qrstudio_business::ImageData;

/// Decode an in-memory image file (PNG, JPG, ...) into RGBA pixels.
pub fn load_image_from_bytes(bytes: &[u8]) -> Option<ImageData> {
    let img = match image::load_from_memory(bytes) {
        Ok(img) => img,
        Err(err) => {
            log::warn!("failed to decode image ({} bytes): {err}", bytes.len());
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

/// Read and decode an image file from disk.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_image_from_path(path: &std::path::Path) -> Option<ImageData> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("failed to read {}: {err}", path.display());
            return None;
        }
    };
    load_image_from_bytes(&bytes)
}
