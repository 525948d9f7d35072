//! Relative timestamps for the history panel ("3 min ago").

use qrstudio_i18n::{Language, TranslationKey, translate};

/// Format how long ago `then_millis` was, relative to `now_millis`, in the
/// given language. Sub-minute deltas (and clock skew into the future) read
/// as "just now".
pub fn relative_time(language: Language, now_millis: i64, then_millis: i64) -> String {
    let minutes = (now_millis - then_millis) / 60_000;
    if minutes < 1 {
        return translate(language, TranslationKey::JustNow).to_owned();
    }
    if minutes < 60 {
        return with_count(language, TranslationKey::MinutesAgo, minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return with_count(language, TranslationKey::HoursAgo, hours);
    }
    with_count(language, TranslationKey::DaysAgo, hours / 24)
}

fn with_count(language: Language, key: TranslationKey, n: i64) -> String {
    translate(language, key).replace("{n}", &n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: i64 = 60_000;

    #[test]
    fn test_buckets() {
        let now = 1_000_000_000;
        assert_eq!(relative_time(Language::English, now, now), "just now");
        assert_eq!(
            relative_time(Language::English, now, now - 5 * MINUTE),
            "5 min ago"
        );
        assert_eq!(
            relative_time(Language::English, now, now - 3 * 60 * MINUTE),
            "3 h ago"
        );
        assert_eq!(
            relative_time(Language::English, now, now - 50 * 24 * 60 * MINUTE),
            "50 d ago"
        );
    }

    #[test]
    fn test_future_timestamps_read_as_just_now() {
        let now = 1_000_000_000;
        assert_eq!(
            relative_time(Language::English, now, now + 10 * MINUTE),
            "just now"
        );
    }

    #[test]
    fn test_translated() {
        let now = 1_000_000_000;
        assert_eq!(
            relative_time(Language::German, now, now - 5 * MINUTE),
            "vor 5 Min."
        );
    }
}
