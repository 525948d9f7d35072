//! The composition-root application state.

use std::rc::Rc;

use egui::TextureHandle;
use qrstudio_business::image_from_data_url;
use qrstudio_history::{HistoryStore, MemoryStore, SharedStorage, shared};
use qrstudio_i18n::{Language, TranslationKey, translate};

use crate::utils::texture;

/// Storage key the selected language code lives under.
pub const LANGUAGE_KEY: &str = "qr-studio-language";

/// Which page the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Reader,
    Generator,
}

/// Reader page state: the current image and what decoding it produced.
#[derive(Default)]
pub struct ReaderState {
    /// Texture of the image being shown, if any.
    pub texture: Option<TextureHandle>,
    /// Persistable reference to that image (PNG data URL).
    pub image_ref: Option<String>,
    /// Decoded content of the current image.
    pub decoded: Option<String>,
    /// Error to show instead of (or alongside) a result.
    pub error: Option<TranslationKey>,
    /// Transient confirmation ("Copied to clipboard").
    pub notice: Option<TranslationKey>,
}

/// Generator page state.
#[derive(Default)]
pub struct GeneratorState {
    /// The text being encoded.
    pub text: String,
    /// Rendered preview and the text it was rendered from, so the texture is
    /// only re-uploaded when the input actually changed.
    pub preview: Option<(String, TextureHandle)>,
    /// Encoding failure shown under the input (e.g. text too long for a QR).
    pub error: Option<String>,
    /// Transient confirmation ("Saved").
    pub notice: Option<TranslationKey>,
}

/// The main application state.
///
/// Owned by the app and passed by reference to pages and widgets; the
/// history store and the language preference share one storage backend.
pub struct State {
    pub history: HistoryStore,
    pub language: Language,
    pub active_tab: Tab,
    pub history_open: bool,
    pub reader: ReaderState,
    pub generator: GeneratorState,
    storage: SharedStorage,
}

impl State {
    /// Build the state over `storage`: rehydrates the history and restores
    /// the persisted language selection (unknown or missing code falls back
    /// to English).
    pub fn new(storage: SharedStorage) -> Self {
        let mut history = HistoryStore::new(Rc::clone(&storage));
        history.initialize();

        let language = storage
            .borrow()
            .get(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();

        Self {
            history,
            language,
            active_tab: Tab::default(),
            history_open: false,
            reader: ReaderState::default(),
            generator: GeneratorState::default(),
            storage,
        }
    }

    /// State over throwaway in-memory storage, for tests.
    pub fn test() -> Self {
        Self::new(shared(MemoryStore::new()))
    }

    /// Translate `key` in the current language.
    pub fn tr(&self, key: TranslationKey) -> &'static str {
        translate(self.language, key)
    }

    /// Switch the UI language and persist the choice.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if let Err(err) = self.storage.borrow_mut().set(LANGUAGE_KEY, language.code()) {
            log::warn!("failed to persist language selection: {err}");
        }
    }

    /// Load a history entry back into the reader (the history panel's
    /// "select" action): shows its text, redisplays its source image when
    /// one was kept, and brings the reader page to the front.
    pub fn select_history_entry(&mut self, ctx: &egui::Context, id: &str) {
        let Some(entry) = self.history.list().iter().find(|e| e.id == id) else {
            return;
        };
        let text = entry.text.clone();
        let image_ref = entry.image_ref.clone();

        self.reader.texture = image_ref
            .as_deref()
            .and_then(image_from_data_url)
            .and_then(|img| texture::upload(ctx, "history-image", &img));
        self.reader.image_ref = image_ref;
        self.reader.decoded = Some(text);
        self.reader.error = None;
        self.reader.notice = None;
        self.active_tab = Tab::Reader;
        self.history_open = false;
    }
}
