//! QR decoding, delegated to the `rqrr` crate.
//!
//! The trait seam exists so UI tests can inject a decoder that returns a
//! canned result without touching real pixels.

use image::GrayImage;
use thiserror::Error;

use crate::image_data::ImageData;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// The image is readable but contains no detectable QR code.
    #[error("no QR code found in image")]
    NotFound,
    /// The pixel buffer does not match its stated dimensions.
    #[error("image buffer does not match its dimensions")]
    InvalidImage,
    /// A code was detected but could not be decoded.
    #[error("QR code could not be decoded: {0}")]
    Unreadable(String),
}

/// Decode capability: pixels in, text out.
pub trait QrDecoder {
    fn decode(&self, image: &ImageData) -> Result<String, DecodeError>;
}

/// Production decoder backed by `rqrr`.
#[derive(Debug, Default)]
pub struct RqrrDecoder;

impl QrDecoder for RqrrDecoder {
    fn decode(&self, image: &ImageData) -> Result<String, DecodeError> {
        let gray = to_grayscale(image).ok_or(DecodeError::InvalidImage)?;
        let mut prepared = rqrr::PreparedImage::prepare(gray);
        let grids = prepared.detect_grids();
        let Some(grid) = grids.first() else {
            return Err(DecodeError::NotFound);
        };
        match grid.decode() {
            Ok((_meta, content)) => {
                log::debug!("decoded QR code, {} chars", content.len());
                Ok(content)
            }
            Err(err) => Err(DecodeError::Unreadable(err.to_string())),
        }
    }
}

/// Collapse an RGBA/RGB buffer to the luma image rqrr works on.
fn to_grayscale(image: &ImageData) -> Option<GrayImage> {
    let bpp = image.bytes_per_pixel()?;
    let luma: Vec<u8> = image
        .bytes
        .chunks_exact(bpp)
        .map(|px| {
            let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
            // Rec. 601 weights, same as image's built-in conversion.
            ((r * 299 + g * 587 + b * 114) / 1000) as u8
        })
        .collect();
    GrayImage::from_raw(image.width as u32, image.height as u32, luma)
}
