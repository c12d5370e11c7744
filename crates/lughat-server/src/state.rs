use std::path::Path;

use lughat_config::Config;
use lughat_core::{DictionaryStore, SeedLoader};
use tokio::sync::RwLock;

/// Shared by every handler. Writers take the store lock exclusively, so each
/// mutation is atomic to readers.
pub struct AppState {
    pub config: Config,
    pub store: RwLock<DictionaryStore>,
}

impl AppState {
    pub fn new(config: Config, store: DictionaryStore) -> Self {
        Self {
            config,
            store: RwLock::new(store),
        }
    }

    /// Build the store from the dictionary and search settings
    pub fn from_config(config: Config) -> Self {
        let store = build_store(&config);
        Self::new(config, store)
    }
}

fn build_store(config: &Config) -> DictionaryStore {
    let mut data = if config.dictionary.seed_enabled {
        SeedLoader::load_embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded dictionary: {}", e);
            tracing::warn!("Starting with empty dictionary");
            Default::default()
        })
    } else {
        tracing::info!("Seeding disabled");
        Default::default()
    };

    for path in &config.dictionary.additional_paths {
        match SeedLoader::load_from_file(Path::new(path)) {
            Ok(additional) => {
                tracing::info!("Merging additional dictionary from: {}", path);
                data = SeedLoader::merge(data, additional);
            }
            Err(e) => {
                tracing::warn!("Failed to load dictionary from {}: {}", path, e);
            }
        }
    }

    let store = DictionaryStore::from_data(data).with_search_limit(config.search.max_results);
    tracing::info!("Dictionary ready with {} languages", store.language_count());
    store
}
