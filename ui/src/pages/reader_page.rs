//! Reader page: image acquisition surface plus the decode result.

use egui::{TextEdit, Ui, vec2};
use qrstudio_business::{ContentKind, ImageData, classify};
use qrstudio_i18n::TranslationKey as K;

use crate::state::State;
use crate::utils::file_picker::FilePickerHandler;

/// Renders the reader page. Returns an image when the user picked one via
/// the upload button; the app then runs it through the scan pipeline.
pub fn reader_page(
    state: &mut State,
    ui: &mut Ui,
    picker: &dyn FilePickerHandler,
) -> Option<ImageData> {
    let mut picked = None;

    ui.heading(state.tr(K::ReaderTitle));
    ui.label(state.tr(K::ReaderDescription));
    ui.add_space(12.0);

    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            if ui.button(state.tr(K::UploadInstructions)).clicked() {
                picked = picker.pick();
            }
            ui.weak(state.tr(K::UploadFormats));
            ui.add_space(6.0);
            ui.label(state.tr(K::PasteInstructions));
            ui.weak(state.tr(K::PasteSubtext));
            ui.add_space(8.0);
        });
    });

    if let Some(error) = state.reader.error {
        ui.add_space(8.0);
        ui.colored_label(
            ui.visuals().error_fg_color,
            format!("{}: {}", state.tr(K::ErrorTitle), state.tr(error)),
        );
    }

    // Cheap clones so row rendering below can mutate `state` freely.
    let texture = state.reader.texture.clone();
    let decoded = state.reader.decoded.clone();

    if let Some(texture) = texture {
        ui.add_space(12.0);
        ui.separator();
        ui.columns(2, |columns| {
            columns[0].heading(state.tr(K::QrCodeImage));
            columns[0].add(egui::Image::new(&texture).max_size(vec2(240.0, 240.0)));

            let ui = &mut columns[1];
            ui.heading(state.tr(K::DecodedContent));
            match &decoded {
                Some(text) => {
                    let mut shown = text.as_str();
                    ui.add(
                        TextEdit::multiline(&mut shown)
                            .desired_rows(5)
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        if ui.button(state.tr(K::CopyText)).clicked() {
                            ui.ctx().copy_text(text.clone());
                            state.reader.notice = Some(K::CopiedNotice);
                        }
                        if classify(text) == ContentKind::Url
                            && ui.button(state.tr(K::OpenLink)).clicked()
                        {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(text.clone()));
                        }
                    });
                    if let Some(notice) = state.reader.notice {
                        ui.weak(state.tr(notice));
                    }
                }
                None => {
                    ui.weak(state.tr(K::DecodedPlaceholder));
                }
            }
        });
    }

    picked
}
