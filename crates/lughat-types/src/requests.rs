//! Request bodies and query strings accepted by the admin API.
//!
//! Every field is optional on the wire so that an absent field becomes a
//! typed `MissingParameter` instead of a generic decode failure. `validate`
//! turns a payload into the arguments the store expects.

use lughat_core::normalize::is_blank;
use lughat_core::{NewEntry, RejectedEntry, Sense, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Required, non-blank parameter
pub fn require(name: &str, value: Option<String>) -> Result<String, StoreError> {
    match value {
        Some(v) if !is_blank(&v) => Ok(v),
        _ => Err(StoreError::MissingParameter(name.to_string())),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateEntryRequest {
    pub language: Option<String>,
    pub word: Option<String>,
    pub definitions: Option<Vec<Sense>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEntry {
    pub language: String,
    pub word: String,
    pub senses: Vec<Sense>,
}

impl CreateEntryRequest {
    pub fn validate(self) -> Result<CreateEntry, StoreError> {
        Ok(CreateEntry {
            language: require("language", self.language)?,
            word: require("word", self.word)?,
            senses: self
                .definitions
                .ok_or_else(|| StoreError::MissingParameter("definitions".to_string()))?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateEntryRequest {
    pub definitions: Option<Vec<Sense>>,
}

impl UpdateEntryRequest {
    pub fn validate(self) -> Result<Vec<Sense>, StoreError> {
        self.definitions.ok_or_else(|| {
            StoreError::InvalidPayload("definitions must be provided as an array".to_string())
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchItem {
    pub word: String,
    pub definitions: Vec<Sense>,
}

impl From<BatchItem> for NewEntry {
    fn from(item: BatchItem) -> Self {
        NewEntry::new(item.word, item.definitions)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchCreateRequest {
    pub language: Option<String>,
    /// Items stay raw so one malformed item cannot fail the whole body
    pub entries: Option<Vec<Value>>,
}

impl BatchCreateRequest {
    /// Item-level problems are left for the store to report per item
    pub fn validate(self) -> Result<(String, Vec<Result<NewEntry, RejectedEntry>>), StoreError> {
        let language = require("language", self.language)?;
        let entries = self
            .entries
            .ok_or_else(|| StoreError::MissingParameter("entries".to_string()))?;
        Ok((language, entries.into_iter().map(decode_batch_item).collect()))
    }
}

fn decode_batch_item(value: Value) -> Result<NewEntry, RejectedEntry> {
    let word = value.get("word").and_then(Value::as_str).map(str::to_string);
    serde_json::from_value::<BatchItem>(value)
        .map(NewEntry::from)
        .map_err(|e| RejectedEntry::new(word, e.to_string()))
}

/// Single word lookup body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupRequest {
    pub word: Option<String>,
    pub language: Option<String>,
}

impl LookupRequest {
    /// Returns `(language, word)`
    pub fn validate(self) -> Result<(String, String), StoreError> {
        let word = require("word", self.word)?;
        let language = require("language", self.language)?;
        Ok((language, word))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub language: Option<String>,
    pub query: Option<String>,
}

impl SearchParams {
    /// Returns `(language, query)`. An empty query counts as missing here.
    pub fn validate(self) -> Result<(String, String), StoreError> {
        let language = require("language", self.language)?;
        let query = match self.query {
            Some(q) if !q.is_empty() => q,
            _ => return Err(StoreError::MissingParameter("query".to_string())),
        };
        // query strings are percent-decoded lossily; a replacement char means
        // the raw bytes were not UTF-8
        if language.contains(char::REPLACEMENT_CHARACTER)
            || query.contains(char::REPLACEMENT_CHARACTER)
        {
            return Err(StoreError::InvalidPayload(
                "query parameters must be valid UTF-8".to_string(),
            ));
        }
        Ok((language, query))
    }
}

#[cfg(test)]
mod tests {
    use lughat_core::ErrorKind;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn create_request_requires_every_field() {
        let req: CreateEntryRequest =
            serde_json::from_str(r#"{"language": "en", "definitions": []}"#).unwrap();
        assert_eq!(
            req.validate().unwrap_err(),
            StoreError::MissingParameter("word".to_string())
        );

        let req: CreateEntryRequest =
            serde_json::from_str(r#"{"language": "en", "word": "tree"}"#).unwrap();
        assert_eq!(
            req.validate().unwrap_err(),
            StoreError::MissingParameter("definitions".to_string())
        );

        let req: CreateEntryRequest =
            serde_json::from_str(r#"{"language": " ", "word": "tree", "definitions": []}"#)
                .unwrap();
        assert_eq!(req.validate().unwrap_err().kind(), ErrorKind::MissingParameter);
    }

    #[test]
    fn create_request_parses_camel_case_senses() {
        let req: CreateEntryRequest = serde_json::from_str(
            r#"{
                "language": "en",
                "word": "Tree",
                "definitions": [{
                    "partOfSpeech": "Noun",
                    "meaning": "A woody plant",
                    "example": "An old tree.",
                    "synonyms": ["plant"]
                }]
            }"#,
        )
        .unwrap();

        let create = req.validate().unwrap();
        assert_eq!(create.language, "en");
        assert_eq!(create.word, "Tree");
        assert_eq!(
            create.senses,
            vec![
                Sense::new("Noun", "A woody plant")
                    .with_example("An old tree.")
                    .with_synonyms(vec!["plant".to_string()])
            ]
        );
    }

    #[test]
    fn non_array_definitions_fail_to_decode() {
        let res = serde_json::from_str::<CreateEntryRequest>(
            r#"{"language": "en", "word": "x", "definitions": "nope"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn update_request_without_definitions_is_invalid_payload() {
        let req: UpdateEntryRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.validate().unwrap_err().kind(), ErrorKind::InvalidPayload);
    }

    #[test]
    fn batch_request_keeps_incomplete_items_for_the_store() {
        let req: BatchCreateRequest = serde_json::from_str(
            r#"{"language": "ru", "entries": [
                {"word": "Вода", "definitions": [{"partOfSpeech": "Сущ.", "meaning": "water"}]},
                {"definitions": []}
            ]}"#,
        )
        .unwrap();

        let (language, entries) = req.validate().unwrap();
        assert_eq!(language, "ru");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].as_ref().unwrap().word, "Вода");
        assert_eq!(entries[1].as_ref().unwrap().word, "");

        let req: BatchCreateRequest = serde_json::from_str(r#"{"language": "ru"}"#).unwrap();
        assert_eq!(
            req.validate().unwrap_err(),
            StoreError::MissingParameter("entries".to_string())
        );
    }

    #[test]
    fn batch_request_rejects_undecodable_items_individually() {
        let req: BatchCreateRequest = serde_json::from_str(
            r#"{"language": "en", "entries": [
                {"word": "good", "definitions": [{"partOfSpeech": "Noun", "meaning": "fine"}]},
                {"word": "bad", "definitions": [{"meaning": "no part of speech"}]},
                "not an object"
            ]}"#,
        )
        .unwrap();

        let (_, entries) = req.validate().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[0],
            Ok(NewEntry::new("good", vec![Sense::new("Noun", "fine")]))
        );

        let rejected = entries[1].as_ref().unwrap_err();
        assert_eq!(rejected.word.as_deref(), Some("bad"));
        assert!(rejected.reason.contains("partOfSpeech"));

        assert_eq!(entries[2].as_ref().unwrap_err().word, None);
    }

    #[test]
    fn search_params_reject_lossy_decoded_values() {
        let params = SearchParams {
            language: Some("en".to_string()),
            query: Some("\u{FFFD}".to_string()),
        };
        assert_eq!(params.validate().unwrap_err().kind(), ErrorKind::InvalidPayload);
    }

    #[test]
    fn search_params_treat_empty_query_as_missing() {
        let params = SearchParams {
            language: Some("en".to_string()),
            query: Some(String::new()),
        };
        assert_eq!(
            params.validate().unwrap_err(),
            StoreError::MissingParameter("query".to_string())
        );

        let params = SearchParams {
            language: Some("en".to_string()),
            query: Some("wat".to_string()),
        };
        assert_eq!(
            params.validate().unwrap(),
            ("en".to_string(), "wat".to_string())
        );
    }

    #[test]
    fn lookup_request_order() {
        let req = LookupRequest {
            word: Some("Hello".to_string()),
            language: Some("en".to_string()),
        };
        assert_eq!(
            req.validate().unwrap(),
            ("en".to_string(), "Hello".to_string())
        );
    }
}
