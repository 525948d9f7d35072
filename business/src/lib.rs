//! Scan/generate capabilities behind the UI: QR decoding and encoding
//! (delegated to `rqrr` and `qrcode`), the pixel-buffer image model, content
//! classification, and the PNG data-URL codec for history image references.

mod content;
mod data_url;
mod decode;
mod encode;
mod image_data;

pub use content::{ContentKind, classify};
pub use data_url::{image_from_data_url, image_to_png_data_url};
pub use decode::{DecodeError, QrDecoder, RqrrDecoder};
pub use encode::{EncodeError, qr_png_bytes, render_qr};
pub use image_data::ImageData;
