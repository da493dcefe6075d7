use serde::{Deserialize, Deserializer, Serialize};

/// One spreadsheet row as read from the first worksheet.
///
/// Every field is optional; blank cells come through as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub english: Option<String>,
    pub pronunciation: Option<String>,
    pub arabic: Option<String>,
    pub image: Option<String>,
}

impl Row {
    pub fn new(
        english: Option<&str>,
        pronunciation: Option<&str>,
        arabic: Option<&str>,
    ) -> Self {
        Self {
            english: english.map(str::to_string),
            pronunciation: pronunciation.map(str::to_string),
            arabic: arabic.map(str::to_string),
            image: None,
        }
    }

    pub fn with_image(mut self, image: Option<&str>) -> Self {
        self.image = image.map(str::to_string);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(deserialize_with = "text_or_scalar")]
    pub english: String,
    #[serde(deserialize_with = "text_or_scalar")]
    pub pronunciation: String,
    #[serde(deserialize_with = "text_or_scalar")]
    pub arabic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "category", deserialize_with = "text_or_scalar")]
    pub name: String,
    pub terms: Vec<Term>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub image: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, image: Option<String>) -> Self {
        Self {
            name: name.into(),
            terms: Vec::new(),
            image,
        }
    }
}

/// Root of the interchange format
pub type Dataset = Vec<Category>;

// Older files always wrote `"image": ""`
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

// Spreadsheet exports keep numeric cells as JSON numbers
fn text_or_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Int(value) => value.to_string(),
        Scalar::UInt(value) => value.to_string(),
        Scalar::Float(value) => value.to_string(),
        Scalar::Bool(value) => value.to_string(),
    })
}
