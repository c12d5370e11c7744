use std::io::Write;

use lughat_config::Config;

use crate::profile::load_config;
use crate::state::AppState;

#[tokio::test]
async fn default_config_seeds_three_languages() {
    let state = AppState::from_config(Config::default());
    let store = state.store.read().await;
    assert_eq!(store.language_count(), 3);
    assert_eq!(store.search_limit(), 20);
}

#[tokio::test]
async fn seeding_can_be_disabled() {
    let mut config = Config::default();
    config.dictionary.seed_enabled = false;
    config.search.max_results = 7;

    let state = AppState::from_config(config);
    let store = state.store.read().await;
    assert_eq!(store.language_count(), 0);
    assert_eq!(store.search_limit(), 7);
}

#[tokio::test]
async fn additional_seed_files_merge_and_bad_paths_are_skipped() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"en": {{"Water": [{{"partOfSpeech": "Noun", "meaning": "overridden"}}]}},
             "de": {{"wasser": [{{"partOfSpeech": "Nomen", "meaning": "water"}}]}}}}"#
    )
    .unwrap();

    let mut config = Config::default();
    config.dictionary.additional_paths = vec![
        "/nonexistent/lughat.json".to_string(),
        file.path().display().to_string(),
    ];

    let state = AppState::from_config(config);
    let store = state.store.read().await;
    assert_eq!(store.language_count(), 4);
    assert_eq!(
        store.get_entry("en", "water").unwrap().senses[0].meaning,
        "overridden"
    );
    assert_eq!(store.entry_count("en"), Some(24));
}

#[test]
fn config_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"server": {{"port": 9090}}, "ping_message": "pong"}}"#
    )
    .unwrap();

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.ping_message, "pong");
}

#[test]
fn missing_config_file_is_an_error() {
    let err = load_config(Some(std::path::Path::new("/nonexistent/lughat-config.json")))
        .unwrap_err();
    assert!(err.to_string().contains("failed to open config"));
}
