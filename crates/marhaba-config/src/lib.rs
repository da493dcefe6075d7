use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::convert::ConvertConfig;
use self::data::DataConfig;
use self::import::ImportConfig;
use self::log::LogConfig;
use self::ui::UiConfig;

pub mod convert;
pub mod data;
pub mod import;
pub mod log;
pub mod ui;

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub convert: ConvertConfig,
    pub import: ImportConfig,
    pub ui: UiConfig,
    pub log: LogConfig,

    /// Bound of the ui <-> app channels
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Self::default().with_env_overrides()
    }

    /// Load a JSON config file, falling back to [`Config::new`] when it doesn't exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::new());
        }

        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;
        let config: Config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        Ok(config.with_env_overrides())
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Some(path) = env_var("MARHABA_WORDS_PATH") {
            self.data.words_path = path.into();
        }
        if let Some(dir) = env_var("MARHABA_CACHE_DIR") {
            self.data.cache_dir = dir.into();
        }
        if let Some(key) = env_var("MARHABA_CACHE_KEY") {
            self.data.cache_key = key;
        }
        if let Some(password) = env_var("MARHABA_IMPORT_PASSWORD") {
            self.import.password = Some(password);
        }
        if let Some(level) = env_var("MARHABA_LOG") {
            self.log.level = level;
        }
        if let Some(capacity) = env::var("MARHABA_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.channel_capacity = capacity;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            convert: ConvertConfig::default(),
            import: ImportConfig::default(),
            ui: UiConfig::default(),
            log: LogConfig::default(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let json = r#"{ "data": { "words_path": "glossary.json" }, "import": { "password": "secret" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.data.words_path, Path::new("glossary.json"));
        assert_eq!(config.data.cache_key, "arabicCommunicationData");
        assert_eq!(config.import.password.as_deref(), Some("secret"));
        assert_eq!(config.convert.output, Path::new("./data/words.json"));
        assert_eq!(config.channel_capacity, 64);
        assert!(!config.log.json);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("does/not/exist/config.json")).unwrap();
        assert_eq!(config.convert.input, Path::new("./data.xlsx"));
    }
}
