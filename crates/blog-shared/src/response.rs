//! Standardized API message bodies.

use serde::{Deserialize, Serialize};

/// Plain `{"message": ...}` body used for confirmations and errors alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub const POST_DELETED: &'static str = "Post deleted";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn post_deleted() -> Self {
        Self::new(Self::POST_DELETED)
    }
}
