/// Canonical form of a word key. Every store path goes through here.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
}

/// Empty or whitespace only
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_ascii_and_cyrillic() {
        assert_eq!(normalize_word("WATER"), "water");
        assert_eq!(normalize_word("Привет"), "привет");
        assert_eq!(normalize_word("САЛОМ"), "салом");
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        assert_eq!(normalize_word(" Tree "), " tree ");
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(!is_blank(" a "));
    }
}
