use serde::{Deserialize, Serialize};

use crate::parsed_or;

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Load the bundled sample entries at startup
    #[serde(default = "default_enabled")]
    pub seed_enabled: bool,
    /// Extra seed files merged over the bundled data, in order
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            seed_enabled: default_enabled(),
            additional_paths: vec![],
        }
    }
}

impl DictionaryConfig {
    pub(crate) fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        let additional_paths = var("DICTIONARY_PATHS")
            .map(|paths| {
                paths
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            seed_enabled: parsed_or(var, "SEED_ENABLED", default_enabled()),
            additional_paths,
        }
    }
}
