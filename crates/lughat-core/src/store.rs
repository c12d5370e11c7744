use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::language;
use crate::normalize::{is_blank, normalize_word};
use crate::types::{
    BatchReport, DictionaryData, Entry, LanguageSummary, NewEntry, RejectedEntry, Sense,
};

/// Maximum number of search results unless configured otherwise
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_SEARCH_LIMIT,
        }
    }
}

type WordMap = BTreeMap<String, Vec<Sense>>;

/// In-memory multilingual dictionary.
///
/// Languages map to entries keyed by the normalized word. Keys are iterated in
/// ascending order, which is the order every listing and search returns.
/// Reads hand out owned copies; nothing inside the store is reachable by
/// reference from outside.
#[derive(Debug, Default)]
pub struct DictionaryStore {
    languages: BTreeMap<String, WordMap>,
    search: SearchOptions,
}

impl DictionaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `data`
    pub fn from_data(data: DictionaryData) -> Self {
        let mut store = Self::new();
        store.seed(data);
        store
    }

    pub fn with_search_limit(mut self, max_results: usize) -> Self {
        self.search.max_results = max_results;
        self
    }

    /// Merge seed data into the store. Seeded entries override existing ones.
    /// Words with no senses are dropped, and a language only appears once at
    /// least one of its words survives.
    pub fn seed(&mut self, data: DictionaryData) {
        for (language, words) in data {
            let mut kept = Vec::with_capacity(words.len());
            for (word, senses) in words {
                if senses.is_empty() {
                    tracing::warn!("Skipping seed word '{}' in {}: no senses", word, language);
                    continue;
                }
                kept.push((normalize_word(&word), senses));
            }
            if kept.is_empty() {
                tracing::warn!("Skipping seed language {}: no usable entries", language);
                continue;
            }

            let target = self.languages.entry(language.clone()).or_default();
            target.extend(kept);
            tracing::debug!("Seeded {}: {} entries", language, target.len());
        }
    }

    /// Every initialized language with its display names and entry count
    pub fn list_languages(&self) -> Vec<LanguageSummary> {
        self.languages
            .iter()
            .map(|(code, words)| LanguageSummary {
                code: code.clone(),
                display_name: language::display_name(code).to_string(),
                native_name: language::native_name(code).to_string(),
                entry_count: words.len(),
            })
            .collect()
    }

    pub fn list_entries(&self, language: &str) -> Result<Vec<Entry>, StoreError> {
        let words = self.words(language)?;
        Ok(words.iter().map(to_entry).collect())
    }

    pub fn get_entry(&self, language: &str, word: &str) -> Result<Entry, StoreError> {
        let words = self.words(language)?;
        let key = normalize_word(word);
        words
            .get_key_value(&key)
            .map(to_entry)
            .ok_or_else(|| word_not_found(language, word))
    }

    /// Single word lookup for translation-style consumers
    pub fn lookup(&self, language: &str, word: &str) -> Result<Entry, StoreError> {
        self.get_entry(language, word)
    }

    /// Insert a new entry. Never overwrites an existing word.
    pub fn create_entry(
        &mut self,
        language: &str,
        word: &str,
        senses: Vec<Sense>,
    ) -> Result<Entry, StoreError> {
        validate_word(word)?;
        validate_senses(&senses)?;

        let key = normalize_word(word);
        let words = self.languages.entry(language.to_string()).or_default();
        if words.contains_key(&key) {
            return Err(StoreError::DuplicateWord {
                language: language.to_string(),
                word: word.to_string(),
            });
        }

        tracing::debug!("Creating '{}' in {} ({} senses)", key, language, senses.len());
        words.insert(key.clone(), senses.clone());
        Ok(Entry { word: key, senses })
    }

    /// Replace the full sense list of an existing entry
    pub fn update_entry(
        &mut self,
        language: &str,
        word: &str,
        senses: Vec<Sense>,
    ) -> Result<Entry, StoreError> {
        let key = normalize_word(word);
        let words = self.words_mut(language)?;
        let slot = words
            .get_mut(&key)
            .ok_or_else(|| word_not_found(language, word))?;
        validate_senses(&senses)?;

        tracing::debug!("Updating '{}' in {} ({} senses)", key, language, senses.len());
        *slot = senses.clone();
        Ok(Entry { word: key, senses })
    }

    /// Remove an entry entirely
    pub fn delete_entry(&mut self, language: &str, word: &str) -> Result<(), StoreError> {
        let key = normalize_word(word);
        let words = self.words_mut(language)?;
        if words.remove(&key).is_none() {
            return Err(word_not_found(language, word));
        }
        tracing::debug!("Deleted '{}' from {}", key, language);
        Ok(())
    }

    /// Best-effort bulk insert. Existing words and invalid items are skipped
    /// and reported; the rest are written in input order.
    pub fn batch_create(&mut self, language: &str, entries: Vec<NewEntry>) -> BatchReport {
        self.batch_create_items(language, entries.into_iter().map(Ok).collect())
    }

    /// Like [`batch_create`](Self::batch_create), but also accepts items that
    /// were already rejected while decoding. Those are skipped and reported
    /// in their input position.
    pub fn batch_create_items(
        &mut self,
        language: &str,
        items: Vec<Result<NewEntry, RejectedEntry>>,
    ) -> BatchReport {
        let words = self.languages.entry(language.to_string()).or_default();
        let mut report = BatchReport::default();

        for (idx, item) in items.into_iter().enumerate() {
            let NewEntry { word, senses } = match item {
                Ok(entry) => entry,
                Err(RejectedEntry { word, reason }) => {
                    report.skipped_count += 1;
                    report.messages.push(match word {
                        Some(word) => format!("Word '{word}' is invalid, skipped: {reason}"),
                        None => format!("Entry {idx} is invalid, skipped: {reason}"),
                    });
                    continue;
                }
            };

            if let Err(e) = validate_word(&word).and_then(|_| validate_senses(&senses)) {
                report.skipped_count += 1;
                report.messages.push(format!("Word '{word}' is invalid, skipped: {e}"));
                continue;
            }

            let key = normalize_word(&word);
            if words.contains_key(&key) {
                report.skipped_count += 1;
                report.messages.push(format!("Word '{word}' already exists, skipped"));
                continue;
            }

            words.insert(key, senses);
            report.created_count += 1;
        }

        tracing::debug!(
            "Batch into {}: {} created, {} skipped",
            language,
            report.created_count,
            report.skipped_count
        );
        report
    }

    /// Case-insensitive substring match on word keys, capped at the store's
    /// search limit
    pub fn search(&self, language: &str, query: &str) -> Result<Vec<Entry>, StoreError> {
        self.search_with(language, query, &self.search)
    }

    pub fn search_with(
        &self,
        language: &str,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<Entry>, StoreError> {
        let words = self.words(language)?;
        let needle = normalize_word(query);
        Ok(words
            .iter()
            .filter(|(word, _)| word.contains(&needle))
            .take(options.max_results)
            .map(to_entry)
            .collect())
    }

    pub fn contains_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    pub fn entry_count(&self, language: &str) -> Option<usize> {
        self.languages.get(language).map(|words| words.len())
    }

    pub fn search_limit(&self) -> usize {
        self.search.max_results
    }

    fn words(&self, language: &str) -> Result<&WordMap, StoreError> {
        self.languages
            .get(language)
            .ok_or_else(|| StoreError::LanguageNotFound(language.to_string()))
    }

    fn words_mut(&mut self, language: &str) -> Result<&mut WordMap, StoreError> {
        self.languages
            .get_mut(language)
            .ok_or_else(|| StoreError::LanguageNotFound(language.to_string()))
    }
}

fn to_entry((word, senses): (&String, &Vec<Sense>)) -> Entry {
    Entry {
        word: word.clone(),
        senses: senses.clone(),
    }
}

fn word_not_found(language: &str, word: &str) -> StoreError {
    StoreError::WordNotFound {
        language: language.to_string(),
        word: word.to_string(),
    }
}

fn validate_word(word: &str) -> Result<(), StoreError> {
    if is_blank(word) {
        return Err(StoreError::MissingParameter("word".to_string()));
    }
    Ok(())
}

/// At least one sense; each needs a part of speech and a meaning
pub fn validate_senses(senses: &[Sense]) -> Result<(), StoreError> {
    if senses.is_empty() {
        return Err(StoreError::InvalidPayload(
            "definitions must contain at least one sense".to_string(),
        ));
    }
    for (idx, sense) in senses.iter().enumerate() {
        if is_blank(&sense.part_of_speech) {
            return Err(StoreError::InvalidPayload(format!(
                "definitions[{idx}].partOfSpeech is required"
            )));
        }
        if is_blank(&sense.meaning) {
            return Err(StoreError::InvalidPayload(format!(
                "definitions[{idx}].meaning is required"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
