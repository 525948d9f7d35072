use serde::{Deserialize, Serialize};

/// One recorded scan result.
///
/// Entries are persisted as part of the history blob, so the field set here
/// is the on-disk schema. `image_ref` is an opaque handle (in practice a PNG
/// data URL) that the UI can turn back into a displayable image; the history
/// itself never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Stable handle for removal and selection, generated at creation time.
    pub id: String,
    /// The decoded content. Also the deduplication key.
    pub text: String,
    /// Last-touched time in milliseconds since the Unix epoch. Updated when
    /// the same text is recorded again.
    pub timestamp: i64,
    /// Reference to the source image for this entry, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}
