use serde::{Deserialize, Serialize};

use crate::parsed_or;

fn default_max_results() -> usize {
    20
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

impl SearchConfig {
    pub(crate) fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            max_results: parsed_or(var, "SEARCH_MAX_RESULTS", default_max_results()),
        }
    }
}
