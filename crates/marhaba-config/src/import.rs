use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ImportConfig {
    /// When set, spreadsheet imports must present this password
    pub password: Option<String>,
}

impl ImportConfig {
    pub fn accepts(&self, password: Option<&str>) -> bool {
        match &self.password {
            Some(expected) => password == Some(expected.as_str()),
            None => true,
        }
    }
}
