//! Language selection: labels change with the language and the choice is
//! persisted through the shared storage backend.

use std::rc::Rc;

use egui_kittest::Harness;
use kittest::Queryable;
use qrstudio_history::{MemoryStore, shared};
use qrstudio_i18n::{Language, TranslationKey};
use qrstudio_ui::state::{LANGUAGE_KEY, State};
use qrstudio_ui::widgets::language_selector;

#[test]
fn test_language_switch_translates_labels_and_persists() {
    let storage = shared(MemoryStore::new());
    let state = State::new(Rc::clone(&storage));

    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            ui.heading(state.tr(TranslationKey::ReaderTitle));
            language_selector(state, ui);
        },
        state,
    );

    assert!(harness.query_by_label_contains("QR Code Reader").is_some());

    harness.state_mut().set_language(Language::German);
    harness.run();

    assert!(harness.query_by_label_contains("QR-Code-Leser").is_some());
    assert_eq!(storage.borrow().get(LANGUAGE_KEY), Some("de".to_owned()));
}

#[test]
fn test_persisted_language_is_restored_on_startup() {
    let storage = shared(MemoryStore::new());
    storage.borrow_mut().set(LANGUAGE_KEY, "ja").unwrap();

    let state = State::new(storage);
    assert_eq!(state.language, Language::Japanese);
}

#[test]
fn test_unknown_persisted_code_falls_back_to_english() {
    let storage = shared(MemoryStore::new());
    storage.borrow_mut().set(LANGUAGE_KEY, "tlh").unwrap();

    let state = State::new(storage);
    assert_eq!(state.language, Language::English);
}
