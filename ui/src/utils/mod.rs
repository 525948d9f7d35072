pub mod clipboard;
pub mod drop_handler;
pub mod file_picker;
pub mod image_load;
pub mod texture;
pub mod time_format;
#[cfg(target_arch = "wasm32")]
pub mod web_storage;
