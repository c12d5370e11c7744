use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw dictionary data: language code -> word -> senses
pub type DictionaryData = BTreeMap<String, BTreeMap<String, Vec<Sense>>>;

/// One definition of a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sense {
    /// Free-text label, e.g. "Noun"
    pub part_of_speech: String,
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antonyms: Option<Vec<String>>,
}

impl Sense {
    pub fn new(part_of_speech: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            meaning: meaning.into(),
            example: None,
            synonyms: None,
            antonyms: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_synonyms(mut self, synonyms: Vec<String>) -> Self {
        self.synonyms = Some(synonyms);
        self
    }

    pub fn with_antonyms(mut self, antonyms: Vec<String>) -> Self {
        self.antonyms = Some(antonyms);
        self
    }
}

/// A word key and its ordered senses. Index 0 is the primary sense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    pub senses: Vec<Sense>,
}

impl Entry {
    pub fn primary_sense(&self) -> Option<&Sense> {
        self.senses.first()
    }
}

/// Input item for batch creation, word not yet normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub word: String,
    pub senses: Vec<Sense>,
}

impl NewEntry {
    pub fn new(word: impl Into<String>, senses: Vec<Sense>) -> Self {
        Self {
            word: word.into(),
            senses,
        }
    }
}

/// Batch item that could not be decoded into a [`NewEntry`].
/// `word` is kept when the raw item still carried one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub word: Option<String>,
    pub reason: String,
}

impl RejectedEntry {
    pub fn new(word: Option<String>, reason: impl Into<String>) -> Self {
        Self {
            word,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSummary {
    pub code: String,
    pub display_name: String,
    pub native_name: String,
    /// Number of distinct words
    pub entry_count: usize,
}

/// Outcome of a best-effort batch create
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub created_count: usize,
    pub skipped_count: usize,
    pub messages: Vec<String>,
}
