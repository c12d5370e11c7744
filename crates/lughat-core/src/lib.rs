pub mod error;
pub mod language;
pub mod loader;
pub mod normalize;
pub mod store;
pub mod types;

pub use error::{ErrorKind, LoadError, StoreError};
pub use language::LanguageMeta;
pub use loader::SeedLoader;
pub use normalize::normalize_word;
pub use store::{DEFAULT_SEARCH_LIMIT, DictionaryStore, SearchOptions};
pub use types::{
    BatchReport, DictionaryData, Entry, LanguageSummary, NewEntry, RejectedEntry, Sense,
};
