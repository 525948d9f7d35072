//! The scan history: toggle button, floating window, and the list itself.
//!
//! The panel re-reads the store's list every frame, so it reflects every
//! mutation without any subscription machinery. Row actions are collected
//! first and applied after rendering, because applying them mutates the
//! list being rendered.

use chrono::Utc;
use egui::{Context, ScrollArea, Ui};
use qrstudio_business::{ContentKind, classify};
use qrstudio_i18n::TranslationKey as K;

use crate::state::State;
use crate::utils::time_format::relative_time;

/// Longest text shown in a row before it is elided.
const ROW_TEXT_CHARS: usize = 42;

/// Menu-bar toggle for the history window.
pub fn history_button(state: &mut State, ui: &mut Ui) {
    let label = state.tr(K::HistoryTitle);
    ui.toggle_value(&mut state.history_open, label);
}

/// The floating history window, when open.
pub fn history_window(state: &mut State, ctx: &Context) {
    if !state.history_open {
        return;
    }
    let mut open = true;
    egui::Window::new(state.tr(K::HistoryTitle))
        .open(&mut open)
        .default_width(380.0)
        .show(ctx, |ui| history_panel(state, ui));
    // Selecting an entry closes the window from inside the panel; the
    // window's own close button is honored here.
    if !open {
        state.history_open = false;
    }
}

enum RowAction {
    Select(String),
    Remove(String),
    Copy(String),
    OpenUrl(String),
}

/// The list body. Public so tests can drive it without a window.
pub fn history_panel(state: &mut State, ui: &mut Ui) {
    if state.history.list().is_empty() {
        ui.weak(state.tr(K::NoHistory));
        return;
    }

    if ui.button(state.tr(K::ClearHistory)).clicked() {
        state.history.clear();
        return;
    }
    ui.separator();

    let now = Utc::now().timestamp_millis();
    // Snapshot the rows: applying an action mutates the underlying list.
    let rows: Vec<(String, String, i64)> = state
        .history
        .list()
        .iter()
        .map(|e| (e.id.clone(), e.text.clone(), e.timestamp))
        .collect();

    let mut action = None;
    ScrollArea::vertical().max_height(340.0).show(ui, |ui| {
        for (id, text, timestamp) in &rows {
            ui.horizontal(|ui| {
                if ui.link(elide(text)).clicked() {
                    action = Some(RowAction::Select(id.clone()));
                }
            });
            ui.horizontal(|ui| {
                ui.weak(relative_time(state.language, now, *timestamp));
                if ui.small_button(state.tr(K::CopyText)).clicked() {
                    action = Some(RowAction::Copy(text.clone()));
                }
                if classify(text) == ContentKind::Url
                    && ui.small_button(state.tr(K::OpenLink)).clicked()
                {
                    action = Some(RowAction::OpenUrl(text.clone()));
                }
                if ui.small_button(state.tr(K::RemoveFromHistory)).clicked() {
                    action = Some(RowAction::Remove(id.clone()));
                }
            });
            ui.separator();
        }
    });

    match action {
        Some(RowAction::Select(id)) => state.select_history_entry(ui.ctx(), &id),
        Some(RowAction::Remove(id)) => state.history.remove(&id),
        Some(RowAction::Copy(text)) => ui.ctx().copy_text(text),
        Some(RowAction::OpenUrl(url)) => ui.ctx().open_url(egui::OpenUrl::new_tab(url)),
        None => {}
    }
}

fn elide(text: &str) -> String {
    match text.char_indices().nth(ROW_TEXT_CHARS) {
        Some((byte_index, _)) => format!("{}…", &text[..byte_index]),
        None => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elide_short_text_untouched() {
        assert_eq!(elide("short"), "short");
    }

    #[test]
    fn test_elide_long_text() {
        let long = "x".repeat(100);
        let elided = elide(&long);
        assert_eq!(elided.chars().count(), ROW_TEXT_CHARS + 1);
        assert!(elided.ends_with('…'));
    }

    #[test]
    fn test_elide_is_char_boundary_safe() {
        let long = "テキスト".repeat(20);
        let elided = elide(&long);
        assert!(elided.ends_with('…'));
    }
}
