use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - a single blog entry.
///
/// Serialized in camelCase; `updatedAt` is omitted until the first update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new post with a generated ID and creation timestamp.
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrite the provided fields and refresh `updated_at`.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        // Clock skew must never put the update before creation.
        self.updated_at = Some(Utc::now().max(self.created_at));
    }
}

/// Field updates for an existing post. `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

/// Unsaved title/content pair held by a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields are required before a draft may be sent anywhere.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self::new(post.title.clone(), post.content.clone())
    }
}

/// Parse a path segment into a post identifier.
pub fn parse_post_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_has_no_update_timestamp() {
        let post = Post::new("A".to_string(), "B".to_string());
        assert!(post.updated_at.is_none());

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["title"], "A");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn apply_overwrites_fields_and_stamps_update() {
        let mut post = Post::new("A".to_string(), "B".to_string());
        let id = post.id;
        let created_at = post.created_at;

        post.apply(PostChanges::new("C", "D"));

        assert_eq!(post.id, id);
        assert_eq!(post.title, "C");
        assert_eq!(post.content, "D");
        assert_eq!(post.created_at, created_at);
        assert!(post.updated_at.unwrap() >= post.created_at);
    }

    #[test]
    fn apply_keeps_absent_fields() {
        let mut post = Post::new("A".to_string(), "B".to_string());
        post.apply(PostChanges {
            title: Some("C".to_string()),
            content: None,
        });

        assert_eq!(post.title, "C");
        assert_eq!(post.content, "B");
    }

    #[test]
    fn draft_requires_both_fields() {
        assert!(PostDraft::new("A", "B").is_complete());
        assert!(!PostDraft::new("", "B").is_complete());
        assert!(!PostDraft::new("A", "").is_complete());
        assert!(!PostDraft::default().is_complete());
    }

    #[test]
    fn parse_post_id_rejects_garbage() {
        let id = Uuid::new_v4();
        assert_eq!(parse_post_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_post_id("not-an-id"),
            Err(DomainError::InvalidId(raw)) if raw == "not-an-id"
        ));
    }
}
