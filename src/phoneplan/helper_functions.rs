use std::borrow::Cow;

use crate::string_util::group_digits;

/// Normalizes a raw user-typed string down to the characters that carry
/// dialing information: decimal digits plus at most one leading plus sign.
/// Unicode decimals (e.g. full-width digits) are folded to ASCII first.
/// Never fails and is idempotent; already-clean input is borrowed as-is.
pub(super) fn normalize(raw: &str) -> Cow<'_, str> {
    let trimmed = raw.trim();
    let already_clean = trimmed
        .char_indices()
        .all(|(index, c)| c.is_ascii_digit() || (index == 0 && c == '+'));
    if already_clean {
        return Cow::Borrowed(trimmed);
    }
    let decimalized = dec_from_char::normalize_decimals(trimmed);
    let decimalized: &str = decimalized.as_ref();
    let mut cleaned = String::with_capacity(decimalized.len());
    for (index, c) in decimalized.char_indices() {
        if c.is_ascii_digit() || (index == 0 && c == '+') {
            cleaned.push(c);
        }
    }
    Cow::Owned(cleaned)
}

pub(super) fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Renders a subscriber number in its conventional hyphenated groups:
/// six digits as 3-3, seven as 3-4, eight as 4-4. Other lengths are left
/// ungrouped.
pub(super) fn hyphenate_subscriber(subscriber: &str) -> String {
    match subscriber.len() {
        6 | 7 => group_digits(subscriber, &[3], "-"),
        8 => group_digits(subscriber, &[4], "-"),
        _ => subscriber.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{hyphenate_subscriber, is_ascii_digits, normalize};

    #[test]
    fn normalize_strips_punctuation_and_keeps_leading_plus() {
        assert_eq!(normalize(" +54 (11) 5123-4567 "), "+541151234567");
        assert_eq!(normalize("11 5123 4567"), "1151234567");
        assert_eq!(normalize("tel:911"), "911");
        assert_eq!(normalize("11+22"), "1122");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["+54 9 11 5123-4567", "no digits", "１１５１２３４５６７", ""] {
            let once = normalize(raw).into_owned();
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn normalize_folds_unicode_decimals() {
        assert_eq!(normalize("１１５１２３４５６７"), "1151234567");
    }

    #[test]
    fn hyphenation_follows_subscriber_length() {
        assert_eq!(hyphenate_subscriber("123456"), "123-456");
        assert_eq!(hyphenate_subscriber("1234567"), "123-4567");
        assert_eq!(hyphenate_subscriber("12345678"), "1234-5678");
        assert_eq!(hyphenate_subscriber("12345"), "12345");
    }

    #[test]
    fn digit_check_rejects_empty_and_mixed() {
        assert!(is_ascii_digits("0123456789"));
        assert!(!is_ascii_digits(""));
        assert!(!is_ascii_digits("12a4"));
    }
}
