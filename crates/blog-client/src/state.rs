//! Process-local view state.

use uuid::Uuid;

use blog_core::domain::{Post, PostDraft};

/// The post currently open in the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub id: Uuid,
    pub draft: PostDraft,
}

/// Everything the view renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientState {
    pub posts: Vec<Post>,
    pub new_post: PostDraft,
    pub editing: Option<EditState>,
    /// Latest failure only; each new failure overwrites it.
    pub error: Option<String>,
}

impl ClientState {
    pub fn post(&self, id: Uuid) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub(crate) fn set_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}
