use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_input() -> PathBuf {
    PathBuf::from("./data.xlsx")
}

fn default_output() -> PathBuf {
    PathBuf::from("./data/words.json")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ConvertConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}
