use serde::{Deserialize, Serialize};

fn default_welcome_title() -> String {
    "Welcome, Nurse!".to_string()
}

fn default_welcome_message() -> String {
    "Pick a topic to start learning, or type a search to find a specific term.".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_welcome_title")]
    pub welcome_title: String,
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            welcome_title: default_welcome_title(),
            welcome_message: default_welcome_message(),
        }
    }
}
