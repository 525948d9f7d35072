mod history_panel;
mod language_selector;

pub use history_panel::{history_button, history_panel, history_window};
pub use language_selector::language_selector;
