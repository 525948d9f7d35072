//! End-to-end scan flow through the full app: a pasted image is decoded,
//! displayed, and recorded into the history. Input handlers are mocked;
//! decoding is real.

use std::cell::RefCell;
use std::collections::VecDeque;

use egui_kittest::Harness;
use kittest::Queryable;
use qrstudio_business::{ImageData, RqrrDecoder, render_qr};
use qrstudio_ui::QrStudioApp;
use qrstudio_ui::state::State;
use qrstudio_ui::utils::clipboard::{PasteEvent, PasteHandler};
use qrstudio_ui::utils::drop_handler::DropHandler;
use qrstudio_ui::utils::file_picker::FilePickerHandler;

/// Paste handler fed from a queue, one event per frame.
struct QueuedPaste(RefCell<VecDeque<PasteEvent>>);

impl QueuedPaste {
    fn new(events: impl IntoIterator<Item = PasteEvent>) -> Self {
        Self(RefCell::new(events.into_iter().collect()))
    }
}

impl PasteHandler for QueuedPaste {
    fn handle_paste(&self, _ctx: &egui::Context) -> Option<PasteEvent> {
        self.0.borrow_mut().pop_front()
    }
}

struct NoDrops;

impl DropHandler for NoDrops {
    fn handle_drop(&self, _ctx: &egui::Context) -> Option<ImageData> {
        None
    }
}

struct NoPicker;

impl FilePickerHandler for NoPicker {
    fn pick(&self) -> Option<ImageData> {
        None
    }
}

/// Render a QR code and hand it back as the raw buffer a paste would yield.
fn scanned_qr(text: &str) -> ImageData {
    let rendered = render_qr(text, 256).unwrap();
    let [w, h] = rendered.size;
    let bytes = rendered
        .pixels
        .iter()
        .flat_map(|c| c.to_array())
        .collect::<Vec<u8>>();
    ImageData::new(w, h, bytes)
}

fn app_with_pastes(events: impl IntoIterator<Item = PasteEvent>) -> QrStudioApp {
    QrStudioApp::with_handlers(
        State::test(),
        Box::new(RqrrDecoder),
        Box::new(QueuedPaste::new(events)),
        Box::new(NoDrops),
        Box::new(NoPicker),
    )
}

#[test]
fn test_pasted_qr_is_decoded_and_recorded() {
    let app = app_with_pastes([PasteEvent::Image(scanned_qr("https://example.com/scan"))]);
    let mut harness = Harness::new_eframe(|_| app);
    harness.run();

    let state = harness.state().state();
    assert_eq!(state.history.list().len(), 1);
    assert_eq!(state.history.list()[0].text, "https://example.com/scan");
    assert!(
        state.history.list()[0].image_ref.is_some(),
        "a scan records its source image as the entry's reference"
    );
    assert_eq!(state.reader.decoded.as_deref(), Some("https://example.com/scan"));

    assert!(harness.query_by_label_contains("example.com/scan").is_some());
}

#[test]
fn test_rescanning_same_code_keeps_one_entry() {
    let app = app_with_pastes([
        PasteEvent::Image(scanned_qr("same content")),
        PasteEvent::Image(scanned_qr("same content")),
    ]);
    let mut harness = Harness::new_eframe(|_| app);
    harness.run();
    harness.run();

    assert_eq!(harness.state().state().history.list().len(), 1);
}

#[test]
fn test_paste_without_image_shows_error_and_records_nothing() {
    let app = app_with_pastes([PasteEvent::NoImage]);
    let mut harness = Harness::new_eframe(|_| app);
    harness.run();

    assert!(harness.state().state().history.list().is_empty());
    assert!(
        harness
            .query_by_label_contains("does not contain an image")
            .is_some()
    );
}

#[test]
fn test_undecodable_image_shows_error_and_records_nothing() {
    let blank = ImageData::new(64, 64, vec![255; 64 * 64 * 4]);
    let app = app_with_pastes([PasteEvent::Image(blank)]);
    let mut harness = Harness::new_eframe(|_| app);
    harness.run();

    let state = harness.state().state();
    assert!(state.history.list().is_empty());
    assert!(state.reader.decoded.is_none());
    assert!(harness.query_by_label_contains("QR code not found").is_some());
}
