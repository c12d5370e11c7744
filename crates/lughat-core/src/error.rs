/// Stable failure classes, independent of message text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingParameter,
    InvalidPayload,
    LanguageNotFound,
    WordNotFound,
    DuplicateWord,
}

/// Error types for dictionary store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Language '{0}' not found")]
    LanguageNotFound(String),

    #[error("Word '{word}' not found in {language} dictionary")]
    WordNotFound { language: String, word: String },

    #[error("Word '{word}' already exists in {language} dictionary")]
    DuplicateWord { language: String, word: String },
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::MissingParameter(_) => ErrorKind::MissingParameter,
            StoreError::InvalidPayload(_) => ErrorKind::InvalidPayload,
            StoreError::LanguageNotFound(_) => ErrorKind::LanguageNotFound,
            StoreError::WordNotFound { .. } => ErrorKind::WordNotFound,
            StoreError::DuplicateWord { .. } => ErrorKind::DuplicateWord,
        }
    }
}

/// Errors raised while loading seed data
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
