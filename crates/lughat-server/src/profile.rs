use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use lughat_config::Config;

/// Config from a JSON file when given, otherwise from the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("failed to open config {}", path.display()))?;
            let config = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse config {}", path.display()))?;
            Ok(config)
        }
        None => Ok(Config::new()),
    }
}
