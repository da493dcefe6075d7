//! The JSON file shared by the converter and the viewer.

use marhaba_types::{Category, Dataset};

use crate::error::CoreError;

/// Pretty-printed with two-space indentation
pub fn to_json(dataset: &[Category]) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

pub fn from_json(json: &str) -> Result<Dataset, CoreError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use marhaba_types::Row;

    use super::*;
    use crate::grouper::group_rows;

    #[test]
    fn grouped_rows_survive_a_round_trip() {
        let rows = vec![
            Row::new(Some("Greetings"), None, None).with_image(Some("img/greet.png")),
            Row::new(Some("Hello"), Some("marhaba"), Some("مرحبا")),
            Row::new(Some("Thank you"), Some("shukran"), Some("شكرا")),
            Row::new(Some("Numbers"), None, None),
        ];
        let (dataset, _) = group_rows(rows);

        let json = to_json(&dataset).unwrap();
        let parsed = from_json(&json).unwrap();

        assert_eq!(parsed, dataset);
    }

    #[test]
    fn output_is_indented_with_stable_keys() {
        let (dataset, _) = group_rows(vec![
            Row::new(Some("Greetings"), None, None),
            Row::new(Some("Hello"), Some("marhaba"), Some("مرحبا")),
        ]);

        let json = to_json(&dataset).unwrap();

        assert!(json.starts_with("[\n  {\n    \"category\": \"Greetings\""));
        assert!(json.contains("\"english\": \"Hello\""));
        assert!(json.contains("\"arabic\": \"مرحبا\""));
        assert!(!json.contains("\"image\""));
    }

    #[test]
    fn rejects_non_array_root() {
        assert!(matches!(
            from_json(r#"{ "category": "x", "terms": [] }"#),
            Err(CoreError::Interchange(_))
        ));
        assert!(from_json("not json").is_err());
    }

    #[test]
    fn accepts_numbers_written_by_older_converters() {
        let json = r#"[
          { "category": "Numbers", "terms": [
            { "english": 3, "pronunciation": "thalatha", "arabic": "ثلاثة" }
          ], "image": "" }
        ]"#;

        let dataset = from_json(json).unwrap();

        assert_eq!(dataset[0].terms[0].english, "3");
        assert_eq!(dataset[0].image, None);
        let index = crate::SearchIndex::build(&dataset);
        assert_eq!(index.search("3").len(), 1);
    }
}
