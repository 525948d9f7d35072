//! QR encoding, delegated to the `qrcode` crate.

use std::io::Cursor;

use egui::{Color32, ColorImage};
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::QrCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to encode QR code: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("failed to render PNG: {0}")]
    Png(#[from] image::ImageError),
}

/// Render `text` as a QR code image suitable for an egui texture.
///
/// The code is scaled by whole modules to fit `size` pixels, never below one
/// pixel per module.
pub fn render_qr(text: &str, size: usize) -> Result<ColorImage, EncodeError> {
    let code = QrCode::new(text.as_bytes())?;
    let qr_width = code.width();

    let scale = (size / qr_width).max(1);
    let actual_size = qr_width * scale;

    let mut pixels = vec![Color32::WHITE; actual_size * actual_size];
    for (y, row) in code.to_colors().chunks(qr_width).enumerate() {
        for (x, color) in row.iter().enumerate() {
            if *color == qrcode::Color::Dark {
                for dy in 0..scale {
                    for dx in 0..scale {
                        pixels[(y * scale + dy) * actual_size + (x * scale + dx)] =
                            Color32::BLACK;
                    }
                }
            }
        }
    }

    Ok(ColorImage::new([actual_size, actual_size], pixels))
}

/// Render `text` as a PNG, for saving to disk.
pub fn qr_png_bytes(text: &str, target_width: u32) -> Result<Vec<u8>, EncodeError> {
    let code = QrCode::new(text.as_bytes())?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;

    let scale = (target_width / module_count).max(1);
    let img_size = module_count * scale;

    let mut img = GrayImage::from_pixel(img_size, img_size, Luma([255u8]));
    for (i, color) in modules.iter().enumerate() {
        if *color == qrcode::Color::Dark {
            let x = (i as u32) % module_count;
            let y = (i as u32) / module_count;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(x * scale + dx, y * scale + dy, Luma([0u8]));
                }
            }
        }
    }

    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(img).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
