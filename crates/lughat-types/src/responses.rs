use lughat_core::{BatchReport, Entry, LanguageSummary, Sense};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStats {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub entries: usize,
}

impl From<LanguageSummary> for LanguageStats {
    fn from(summary: LanguageSummary) -> Self {
        Self {
            code: summary.code,
            name: summary.display_name,
            native_name: summary.native_name,
            entries: summary.entry_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResponse {
    pub supported_languages: Vec<LanguageStats>,
    pub total_languages: usize,
}

impl LanguagesResponse {
    pub fn new(summaries: Vec<LanguageSummary>) -> Self {
        let supported_languages: Vec<LanguageStats> =
            summaries.into_iter().map(LanguageStats::from).collect();
        Self {
            total_languages: supported_languages.len(),
            supported_languages,
        }
    }
}

/// `{word, definitions}` as used in listings and search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPayload {
    pub word: String,
    pub definitions: Vec<Sense>,
}

impl From<Entry> for EntryPayload {
    fn from(entry: Entry) -> Self {
        Self {
            word: entry.word,
            definitions: entry.senses,
        }
    }
}

fn payloads(entries: Vec<Entry>) -> Vec<EntryPayload> {
    entries.into_iter().map(EntryPayload::from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesResponse {
    pub language: String,
    pub total_entries: usize,
    pub entries: Vec<EntryPayload>,
}

impl EntriesResponse {
    pub fn new(language: String, entries: Vec<Entry>) -> Self {
        Self {
            language,
            total_entries: entries.len(),
            entries: payloads(entries),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryResponse {
    pub word: String,
    pub language: String,
    pub definitions: Vec<Sense>,
}

impl EntryResponse {
    pub fn new(language: String, entry: Entry) -> Self {
        Self {
            word: entry.word,
            language,
            definitions: entry.senses,
        }
    }
}

/// Body for a successful create or update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMutationResponse {
    pub message: String,
    pub word: String,
    pub language: String,
    pub definitions: Vec<Sense>,
}

impl EntryMutationResponse {
    pub fn created(language: String, entry: Entry) -> Self {
        Self::with_message("Dictionary entry created successfully", language, entry)
    }

    pub fn updated(language: String, entry: Entry) -> Self {
        Self::with_message("Dictionary entry updated successfully", language, entry)
    }

    fn with_message(message: &str, language: String, entry: Entry) -> Self {
        Self {
            message: message.to_string(),
            word: entry.word,
            language,
            definitions: entry.senses,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub word: String,
    pub language: String,
}

impl DeleteResponse {
    pub fn new(language: String, word: String) -> Self {
        Self {
            message: "Dictionary entry deleted successfully".to_string(),
            word,
            language,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResults {
    pub created: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

impl From<BatchReport> for BatchResults {
    fn from(report: BatchReport) -> Self {
        Self {
            created: report.created_count,
            skipped: report.skipped_count,
            errors: report.messages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub message: String,
    pub language: String,
    pub results: BatchResults,
}

impl BatchResponse {
    pub fn new(language: String, report: BatchReport) -> Self {
        Self {
            message: "Batch create completed".to_string(),
            language,
            results: report.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub language: String,
    pub query: String,
    pub total_results: usize,
    pub results: Vec<EntryPayload>,
}

impl SearchResponse {
    pub fn new(language: String, query: String, results: Vec<Entry>) -> Self {
        Self {
            language,
            query,
            total_results: results.len(),
            results: payloads(results),
        }
    }
}

/// Translate-style lookup. Top-level synonyms/antonyms stay empty; the
/// per-sense lists carry the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    pub word: String,
    pub language: String,
    pub definitions: Vec<Sense>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl LookupResponse {
    pub fn new(language: String, word: String, entry: Entry) -> Self {
        Self {
            word,
            language,
            definitions: entry.senses,
            synonyms: vec![],
            antonyms: vec![],
        }
    }
}
