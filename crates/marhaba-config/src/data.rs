use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_words_path() -> PathBuf {
    PathBuf::from("data/words.json")
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".marhaba-cache")
}

fn default_cache_key() -> String {
    "arabicCommunicationData".to_string()
}

/// Where the viewer loads its dataset from
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DataConfig {
    /// Static interchange file, used on cache miss
    #[serde(default = "default_words_path")]
    pub words_path: PathBuf,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    #[serde(default = "default_cache_key")]
    pub cache_key: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            words_path: default_words_path(),
            cache_dir: default_cache_dir(),
            cache_key: default_cache_key(),
        }
    }
}
