//! Lightweight classification of scanned text, used by the UI to decide
//! which actions to offer (open a link, etc.).

/// What a piece of scanned content looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Url,
    Email,
    Phone,
    Text,
}

/// Classify scanned text by shape. Conservative on purpose: only content the
/// UI can safely hand to the system opener is called a URL.
pub fn classify(text: &str) -> ContentKind {
    let trimmed = text.trim();
    if is_url(trimmed) {
        ContentKind::Url
    } else if is_email(trimmed) {
        ContentKind::Email
    } else if is_phone(trimmed) {
        ContentKind::Phone
    } else {
        ContentKind::Text
    }
}

fn is_url(text: &str) -> bool {
    let rest = text
        .strip_prefix("https://")
        .or_else(|| text.strip_prefix("http://"));
    match rest {
        Some(rest) => !rest.is_empty() && !rest.starts_with('/') && !text.contains(char::is_whitespace),
        None => false,
    }
}

fn is_email(text: &str) -> bool {
    if let Some(addr) = text.strip_prefix("mailto:") {
        return !addr.is_empty();
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.ends_with('.')
        && !text.contains(char::is_whitespace)
}

fn is_phone(text: &str) -> bool {
    if text.strip_prefix("tel:").is_some_and(|n| !n.is_empty()) {
        return true;
    }
    let digits = text.chars().filter(char::is_ascii_digit).count();
    digits >= 5
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' ' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(classify("https://example.com"), ContentKind::Url);
        assert_eq!(classify("http://example.com/a?b=c"), ContentKind::Url);
        assert_eq!(classify("  https://example.com  "), ContentKind::Url);
        assert_eq!(classify("https://"), ContentKind::Text);
        assert_eq!(classify("ftp://example.com"), ContentKind::Text);
        assert_eq!(classify("https://bad url.com"), ContentKind::Text);
    }

    #[test]
    fn test_emails() {
        assert_eq!(classify("mailto:a@b.com"), ContentKind::Email);
        assert_eq!(classify("alice@example.org"), ContentKind::Email);
        assert_eq!(classify("not an email @ all"), ContentKind::Text);
        assert_eq!(classify("trailing@dot."), ContentKind::Text);
    }

    #[test]
    fn test_phones() {
        assert_eq!(classify("tel:+15551234567"), ContentKind::Phone);
        assert_eq!(classify("+1 (555) 123-4567"), ContentKind::Phone);
        assert_eq!(classify("12"), ContentKind::Text);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(classify("wifi password: hunter2"), ContentKind::Text);
        assert_eq!(classify(""), ContentKind::Text);
    }
}
