//! Title-ID validation for filter expressions.

/// Decoration characters stripped before validation, on top of
/// whitespace. Some listing exports carry a trademark glyph glued to
/// the ID.
const STRIP_CHARS: &[char] = &['®'];

/// Convert a raw Title ID into an uppercase hex literal.
///
/// Whitespace and decoration characters are stripped first; what
/// remains must be exactly 8 hexadecimal characters. Anything else is
/// `None`, and such records are excluded from every filter file.
pub fn title_id_hex(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !STRIP_CHARS.contains(c))
        .collect();

    if cleaned.len() == 8 && cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(format!("0x{}", cleaned.to_uppercase()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_id_uppercases() {
        assert_eq!(title_id_hex("4d5307e6").as_deref(), Some("0x4D5307E6"));
        assert_eq!(title_id_hex("4D5307E6").as_deref(), Some("0x4D5307E6"));
    }

    #[test]
    fn whitespace_and_decoration_are_stripped() {
        assert_eq!(title_id_hex(" 4d53 07e6 ").as_deref(), Some("0x4D5307E6"));
        assert_eq!(title_id_hex("4d5307e6®").as_deref(), Some("0x4D5307E6"));
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(title_id_hex("4d5307e"), None);
        assert_eq!(title_id_hex("4d5307e6a"), None);
        assert_eq!(title_id_hex(""), None);
    }

    #[test]
    fn non_hex_is_rejected() {
        assert_eq!(title_id_hex("4d5307zz"), None);
        assert_eq!(title_id_hex("光环光环光环光环"), None);
    }
}
