use std::path::Path;

use crate::error::LoadError;
use crate::normalize::normalize_word;
use crate::types::DictionaryData;

pub struct SeedLoader;

impl SeedLoader {
    /// Load the bundled Tajik/English/Russian sample data
    pub fn load_embedded() -> Result<DictionaryData, LoadError> {
        let json = include_str!("../data/seed.json");
        tracing::info!("Loading embedded seed dictionary...");
        let data = Self::from_json(json)?;
        tracing::info!(
            "Loaded {} seed entries across {} languages",
            entry_total(&data),
            data.len()
        );
        Ok(data)
    }

    /// Load seed data from file path
    pub fn load_from_file(path: &Path) -> Result<DictionaryData, LoadError> {
        tracing::info!("Loading seed dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let data = Self::from_json(&json)?;
        tracing::info!("Loaded {} seed entries from file", entry_total(&data));
        Ok(data)
    }

    pub fn from_json(json: &str) -> Result<DictionaryData, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Merge two data sets; `additional` wins per language and normalized word
    pub fn merge(mut base: DictionaryData, additional: DictionaryData) -> DictionaryData {
        for (language, words) in additional {
            let target = base.entry(language).or_default();
            for (word, senses) in words {
                target.insert(normalize_word(&word), senses);
            }
        }
        base
    }
}

fn entry_total(data: &DictionaryData) -> usize {
    data.values().map(|words| words.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sense;

    #[test]
    fn embedded_seed_has_all_three_languages() {
        let data = SeedLoader::load_embedded().unwrap();
        assert!(data.contains_key("tj"));
        assert!(data.contains_key("en"));
        assert!(data.contains_key("ru"));
        let water = &data["en"]["water"];
        assert_eq!(water[0].part_of_speech, "Noun");
    }

    #[test]
    fn embedded_seed_words_are_lowercase_with_senses() {
        let data = SeedLoader::load_embedded().unwrap();
        for words in data.values() {
            for (word, senses) in words {
                assert_eq!(word, &normalize_word(word));
                assert!(!senses.is_empty(), "{word} has no senses");
            }
        }
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let err = SeedLoader::from_json("{\"en\": [1, 2]}").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = SeedLoader::load_from_file(Path::new("/nonexistent/lughat-seed.json"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn merge_overrides_by_normalized_word() {
        let base = SeedLoader::from_json(
            r#"{"en": {"tree": [{"partOfSpeech": "Noun", "meaning": "old"}]}}"#,
        )
        .unwrap();
        let additional = SeedLoader::from_json(
            r#"{"en": {"TREE": [{"partOfSpeech": "Noun", "meaning": "new"}]},
                "fr": {"arbre": [{"partOfSpeech": "Nom", "meaning": "tree"}]}}"#,
        )
        .unwrap();

        let merged = SeedLoader::merge(base, additional);
        assert_eq!(merged["en"].len(), 1);
        assert_eq!(merged["en"]["tree"], vec![Sense::new("Noun", "new")]);
        assert!(merged.contains_key("fr"));
    }
}
