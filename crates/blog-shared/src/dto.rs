//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of create and update requests.
///
/// Both fields are optional on the wire; the server does not enforce presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PostPayload {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_none() {
        let payload: PostPayload = serde_json::from_str(r#"{"title":"A"}"#).unwrap();
        assert_eq!(payload.title.as_deref(), Some("A"));
        assert!(payload.content.is_none());
    }
}
