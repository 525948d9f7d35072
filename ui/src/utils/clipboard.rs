//! Clipboard paste handling (Ctrl+V / Cmd+V).
//!
//! Trait-based so tests can inject a fake clipboard instead of the system
//! one. On native the image is read via arboard; the web build ships a stub
//! (the browser Clipboard API needs async plus a secure context).

use egui::Context;
use qrstudio_business::ImageData;

/// What a paste shortcut produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteEvent {
    /// The clipboard held an image.
    Image(ImageData),
    /// Paste was pressed but the clipboard held no image; the reader shows
    /// an error for this, matching a paste of plain text.
    NoImage,
}

/// Paste capability, mockable for tests.
pub trait PasteHandler {
    /// `None` when no paste shortcut fired this frame.
    fn handle_paste(&self, ctx: &Context) -> Option<PasteEvent>;
}

/// Production handler over the system clipboard.
#[derive(Default)]
pub struct SystemPasteHandler;

#[cfg(not(target_arch = "wasm32"))]
impl PasteHandler for SystemPasteHandler {
    fn handle_paste(&self, ctx: &Context) -> Option<PasteEvent> {
        if !paste_shortcut_pressed(ctx) {
            return None;
        }
        match read_clipboard_image() {
            Some(image) => Some(PasteEvent::Image(image)),
            None => Some(PasteEvent::NoImage),
        }
    }
}

/// Web stub: clipboard images are not reachable synchronously.
#[cfg(target_arch = "wasm32")]
impl PasteHandler for SystemPasteHandler {
    fn handle_paste(&self, _ctx: &Context) -> Option<PasteEvent> {
        None
    }
}

/// Ctrl+V on Windows/Linux, Cmd+V on macOS.
#[cfg(not(target_arch = "wasm32"))]
fn paste_shortcut_pressed(ctx: &Context) -> bool {
    ctx.input(|i| {
        i.events.iter().any(|event| {
            matches!(
                event,
                egui::Event::Key {
                    key: egui::Key::V,
                    pressed: true,
                    modifiers,
                    ..
                } if modifiers.command
            )
        })
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_clipboard_image() -> Option<ImageData> {
    use arboard::Clipboard;

    let mut clipboard = match Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(err) => {
            log::warn!("failed to access clipboard: {err}");
            return None;
        }
    };
    match clipboard.get_image() {
        Ok(img) => {
            // arboard hands back RGBA8.
            log::info!(
                "clipboard image pasted: {}x{}, {} bytes",
                img.width,
                img.height,
                img.bytes.len()
            );
            Some(ImageData::new(img.width, img.height, img.bytes.into_owned()))
        }
        Err(arboard::Error::ContentNotAvailable) => {
            log::debug!("paste pressed but clipboard holds no image");
            None
        }
        Err(err) => {
            log::warn!("failed to read clipboard image: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_events_means_no_paste() {
        let ctx = Context::default();
        assert_eq!(SystemPasteHandler.handle_paste(&ctx), None);
    }
}
