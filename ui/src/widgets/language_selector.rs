//! Language selection combo. Shows the current language's native name and
//! persists any change immediately.

use egui::Ui;
use qrstudio_i18n::Language;

use crate::state::State;

pub fn language_selector(state: &mut State, ui: &mut Ui) {
    let current = state.language;
    let mut selected = current;
    egui::ComboBox::from_id_salt("language-selector")
        .selected_text(current.native_name())
        .show_ui(ui, |ui| {
            for lang in Language::ALL {
                ui.selectable_value(&mut selected, lang, lang.native_name());
            }
        });
    if selected != current {
        state.set_language(selected);
    }
}
