use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use validator::Validate;

/// Body of `POST /get_content`.
///
/// `content_type` stays a plain string here so an unrecognized value
/// fails in the handler with a 400 and the exact
/// `"Invalid content type"` detail, not as a deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct ContentRequest {
    pub content_type: String,

    #[validate(length(min = 1, message = "Prompt is required"))]
    pub prompt: String,

    pub parameters: Option<Map<String, Value>>,
}

/// The routable content categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Audio,
    Video,
}

impl FromStr for ContentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ContentType::Text),
            "audio" => Ok(ContentType::Audio),
            "video" => Ok(ContentType::Video),
            _ => Err(()),
        }
    }
}

/// Normalized result envelope, identical in shape across all content
/// types and across success and failure. Callers must check `status`;
/// the transport status is 200 on both paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentResult {
    pub status: ContentStatus,
    pub content: String,
    pub parameters: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_parses_known_values() {
        assert_eq!("text".parse(), Ok(ContentType::Text));
        assert_eq!("audio".parse(), Ok(ContentType::Audio));
        assert_eq!("video".parse(), Ok(ContentType::Video));
    }

    #[test]
    fn content_type_rejects_unknown_values() {
        assert!("image".parse::<ContentType>().is_err());
        assert!("TEXT".parse::<ContentType>().is_err());
        assert!("".parse::<ContentType>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContentStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&ContentStatus::Error).unwrap(),
            "\"error\""
        );
    }
}
