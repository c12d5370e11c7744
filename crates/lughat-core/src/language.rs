/// Display metadata for a language code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageMeta {
    /// Short code as used in store keys ("tj", "en", "ru")
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

const KNOWN_LANGUAGES: &[LanguageMeta] = &[
    LanguageMeta {
        code: "tj",
        name: "Tajik",
        native_name: "Тоҷикӣ",
    },
    LanguageMeta {
        code: "en",
        name: "English",
        native_name: "English",
    },
    LanguageMeta {
        code: "ru",
        name: "Russian",
        native_name: "Русский",
    },
];

impl LanguageMeta {
    pub fn lookup(code: &str) -> Option<&'static LanguageMeta> {
        KNOWN_LANGUAGES.iter().find(|meta| meta.code == code)
    }
}

pub fn known_languages() -> &'static [LanguageMeta] {
    KNOWN_LANGUAGES
}

/// English name, or the code itself when unknown
pub fn display_name(code: &str) -> &str {
    LanguageMeta::lookup(code).map_or(code, |meta| meta.name)
}

/// Native name, or the code itself when unknown
pub fn native_name(code: &str) -> &str {
    LanguageMeta::lookup(code).map_or(code, |meta| meta.native_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(display_name("tj"), "Tajik");
        assert_eq!(native_name("tj"), "Тоҷикӣ");
        assert_eq!(native_name("ru"), "Русский");
        assert_eq!(known_languages().len(), 3);
    }

    #[test]
    fn unknown_code_falls_back_to_itself() {
        assert_eq!(display_name("fr"), "fr");
        assert_eq!(native_name("fr"), "fr");
        assert!(LanguageMeta::lookup("fr").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(LanguageMeta::lookup("EN").is_none());
    }
}
