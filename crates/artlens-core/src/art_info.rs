//! The structured result describing an identified painting.

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Art-historical information for a single painting.
///
/// Produced exclusively by parsing the AI service's JSON response (tests may
/// construct it by hand). Replaced wholesale on each new query, never merged.
///
/// When the service cannot identify the painting it still returns a
/// well-formed document whose `description` explains the failure; the other
/// fields may then be empty strings. Empty-but-present fields are valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtInfo {
    pub title: String,
    pub artist: String,
    pub year: String,
    pub description: String,
    pub historical_context: String,
}

impl ArtInfo {
    /// Parses the response text returned by the AI service.
    ///
    /// All five fields must be present and be strings; anything else is a
    /// [`QueryError::MalformedResponse`]. The document is never partially
    /// accepted.
    pub fn from_json_text(text: &str) -> Result<Self, QueryError> {
        serde_json::from_str(text.trim()).map_err(|err| {
            tracing::warn!("[ArtInfo] Response shape mismatch: {}", err);
            QueryError::MalformedResponse
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"{
        "title": "Starry Night",
        "artist": "Vincent van Gogh",
        "year": "1889",
        "description": "An oil-on-canvas night scene.",
        "historicalContext": "Painted during the artist's stay in Saint-Remy."
    }"#;

    #[test]
    fn test_parses_well_formed_response() {
        let info = ArtInfo::from_json_text(WELL_FORMED).unwrap();
        assert_eq!(info.title, "Starry Night");
        assert_eq!(info.artist, "Vincent van Gogh");
        assert_eq!(info.year, "1889");
        assert_eq!(info.description, "An oil-on-canvas night scene.");
        assert_eq!(
            info.historical_context,
            "Painted during the artist's stay in Saint-Remy."
        );
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let text = r#"{"title": "t", "artist": "a", "year": "y", "description": "d"}"#;
        assert_eq!(
            ArtInfo::from_json_text(text),
            Err(QueryError::MalformedResponse)
        );
    }

    #[test]
    fn test_non_string_field_is_malformed() {
        let text = r#"{
            "title": "t",
            "artist": "a",
            "year": 1889,
            "description": "d",
            "historicalContext": "h"
        }"#;
        assert_eq!(
            ArtInfo::from_json_text(text),
            Err(QueryError::MalformedResponse)
        );
    }

    #[test]
    fn test_empty_but_present_fields_are_accepted() {
        let text = r#"{
            "title": "",
            "artist": "",
            "year": "",
            "description": "This painting could not be identified.",
            "historicalContext": ""
        }"#;
        let info = ArtInfo::from_json_text(text).unwrap();
        assert!(info.title.is_empty());
        assert_eq!(info.description, "This painting could not be identified.");
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let text = format!("\n  {WELL_FORMED}  \n");
        assert!(ArtInfo::from_json_text(&text).is_ok());
    }
}
