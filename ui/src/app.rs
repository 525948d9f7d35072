//! The application shell: panel layout and the scan pipeline that turns an
//! acquired image into a decoded result plus a history record.

use egui::{Align, Layout, RichText};
use qrstudio_business::{
    DecodeError, ImageData, QrDecoder, RqrrDecoder, image_to_png_data_url,
};
use qrstudio_i18n::TranslationKey as K;

use crate::pages::{generator_page, reader_page};
use crate::state::{State, Tab};
use crate::utils::clipboard::{PasteEvent, PasteHandler, SystemPasteHandler};
use crate::utils::drop_handler::{DropHandler, SystemDropHandler};
use crate::utils::file_picker::{FilePickerHandler, SystemFilePickerHandler};
use crate::utils::texture;
use crate::widgets;

pub struct QrStudioApp {
    state: State,
    decoder: Box<dyn QrDecoder>,
    paste: Box<dyn PasteHandler>,
    drops: Box<dyn DropHandler>,
    picker: Box<dyn FilePickerHandler>,
}

impl QrStudioApp {
    /// App with the production decoder and system input handlers.
    pub fn new(state: State) -> Self {
        Self::with_handlers(
            state,
            Box::new(RqrrDecoder),
            Box::new(SystemPasteHandler),
            Box::new(SystemDropHandler),
            Box::new(SystemFilePickerHandler),
        )
    }

    /// App with injected capabilities, for tests.
    pub fn with_handlers(
        state: State,
        decoder: Box<dyn QrDecoder>,
        paste: Box<dyn PasteHandler>,
        drops: Box<dyn DropHandler>,
        picker: Box<dyn FilePickerHandler>,
    ) -> Self {
        Self {
            state,
            decoder,
            paste,
            drops,
            picker,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Poll the frame's input for a newly supplied image, in the order
    /// paste, drop, file-pick shortcut.
    fn acquire_image(&mut self, ctx: &egui::Context) -> Option<ImageData> {
        match self.paste.handle_paste(ctx) {
            Some(PasteEvent::Image(image)) => return Some(image),
            Some(PasteEvent::NoImage) => {
                self.state.reader.error = Some(K::NoImageError);
                self.state.active_tab = Tab::Reader;
            }
            None => {}
        }
        if let Some(image) = self.drops.handle_drop(ctx) {
            return Some(image);
        }
        self.picker.handle_file_pick(ctx)
    }

    /// Run one image through the scan pipeline: display it, decode it, and
    /// on success record the content in the history (with the image as its
    /// redisplayable reference). Decode failures only set the reader error;
    /// the history is never touched for them.
    pub fn process_image(&mut self, ctx: &egui::Context, image: ImageData) {
        self.state.active_tab = Tab::Reader;
        let reader = &mut self.state.reader;
        reader.decoded = None;
        reader.error = None;
        reader.notice = None;

        reader.texture = texture::upload(ctx, "scanned-image", &image);
        if reader.texture.is_none() {
            reader.image_ref = None;
            reader.error = Some(K::ImageLoadError);
            return;
        }
        let image_ref = image_to_png_data_url(&image);
        reader.image_ref = image_ref.clone();

        match self.decoder.decode(&image) {
            Ok(text) => {
                self.state.reader.decoded = Some(text.clone());
                self.state.history.record(&text, image_ref);
            }
            Err(err) => {
                log::debug!("scan failed: {err}");
                self.state.reader.error = Some(match err {
                    DecodeError::InvalidImage => K::ImageLoadError,
                    DecodeError::NotFound | DecodeError::Unreadable(_) => K::QrNotFoundError,
                });
            }
        }
    }
}

impl eframe::App for QrStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(image) = self.acquire_image(ctx) {
            self.process_image(ctx, image);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.label(RichText::new("QR Studio").strong());
                ui.separator();

                let reader_label = self.state.tr(K::ReaderTab);
                let generator_label = self.state.tr(K::GeneratorTab);
                if ui
                    .selectable_label(self.state.active_tab == Tab::Reader, reader_label)
                    .clicked()
                {
                    self.state.active_tab = Tab::Reader;
                }
                if ui
                    .selectable_label(self.state.active_tab == Tab::Generator, generator_label)
                    .clicked()
                {
                    self.state.active_tab = Tab::Generator;
                }

                ui.separator();
                widgets::history_button(&mut self.state, ui);

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    widgets::language_selector(&mut self.state, ui);
                    ui.weak(self.state.tr(K::LanguageLabel));
                });
            });
        });

        let mut picked = None;
        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_tab {
            Tab::Reader => {
                picked = reader_page(&mut self.state, ui, self.picker.as_ref());
            }
            Tab::Generator => generator_page(&mut self.state, ui),
        });
        if let Some(image) = picked {
            self.process_image(ctx, image);
        }

        widgets::history_window(&mut self.state, ctx);
    }
}
