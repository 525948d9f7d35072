//! Generator page: text in, QR code out, optional save to PNG.

use egui::{TextEdit, TextureOptions, Ui, vec2};
use qrstudio_business::render_qr;
use qrstudio_i18n::TranslationKey as K;

use crate::state::State;

/// Side length of the on-screen preview, in pixels.
const PREVIEW_SIZE: usize = 256;

pub fn generator_page(state: &mut State, ui: &mut Ui) {
    ui.heading(state.tr(K::GeneratorTitle));
    ui.label(state.tr(K::GeneratorDescription));
    ui.add_space(12.0);

    ui.label(state.tr(K::TextToEncode));
    let hint = state.tr(K::EnterTextPlaceholder);
    let response = ui.add(
        TextEdit::singleline(&mut state.generator.text)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        state.generator.notice = None;
    }

    let text = state.generator.text.trim().to_owned();
    if text.is_empty() {
        state.generator.preview = None;
        state.generator.error = None;
        return;
    }

    let stale = state
        .generator
        .preview
        .as_ref()
        .is_none_or(|(rendered_from, _)| *rendered_from != text);
    if stale {
        match render_qr(&text, PREVIEW_SIZE) {
            Ok(img) => {
                // Nearest-neighbor keeps the module edges crisp when scaled.
                let texture = ui
                    .ctx()
                    .load_texture("generated-qr", img, TextureOptions::NEAREST);
                state.generator.preview = Some((text.clone(), texture));
                state.generator.error = None;
            }
            Err(err) => {
                log::debug!("QR encoding failed: {err}");
                state.generator.preview = None;
                state.generator.error = Some(err.to_string());
            }
        }
    }

    if let Some(err) = &state.generator.error {
        ui.add_space(8.0);
        let message = format!("{}: {err}", state.tr(K::ErrorTitle));
        ui.colored_label(ui.visuals().error_fg_color, message);
    }

    if let Some((_, texture)) = state.generator.preview.clone() {
        ui.add_space(12.0);
        ui.separator();
        ui.heading(state.tr(K::GeneratedQrCode));
        ui.add(
            egui::Image::new(&texture)
                .max_size(vec2(PREVIEW_SIZE as f32, PREVIEW_SIZE as f32)),
        );
        ui.add_space(6.0);
        #[cfg(not(target_arch = "wasm32"))]
        if ui.button(state.tr(K::SaveQrCode)).clicked() {
            save_png(state, &text);
        }
        if let Some(notice) = state.generator.notice {
            ui.weak(state.tr(notice));
        }
    }
}

/// Saved PNGs are rendered denser than the preview.
#[cfg(not(target_arch = "wasm32"))]
const EXPORT_SIZE: u32 = 512;

#[cfg(not(target_arch = "wasm32"))]
fn save_png(state: &mut State, text: &str) {
    use qrstudio_business::qr_png_bytes;

    let bytes = match qr_png_bytes(text, EXPORT_SIZE) {
        Ok(bytes) => bytes,
        Err(err) => {
            state.generator.error = Some(err.to_string());
            return;
        }
    };
    let Some(path) = rfd::FileDialog::new()
        .set_file_name("qr-code.png")
        .add_filter("PNG", &["png"])
        .save_file()
    else {
        return;
    };
    match std::fs::write(&path, bytes) {
        Ok(()) => {
            log::info!("saved QR code to {}", path.display());
            state.generator.notice = Some(K::SavedNotice);
        }
        Err(err) => {
            log::warn!("failed to save QR code: {err}");
            state.generator.error = Some(err.to_string());
        }
    }
}
