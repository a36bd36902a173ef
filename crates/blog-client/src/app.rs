//! Event handlers that keep `ClientState` in step with the server.
//!
//! Every mutation of the post list waits for the server's answer; nothing is
//! applied optimistically.

use uuid::Uuid;

use blog_core::domain::PostDraft;
use blog_shared::PostPayload;

use crate::api::PostsApi;
use crate::state::{ClientState, EditState};

pub const FETCH_FAILED: &str = "Error fetching posts. Please try again later.";
pub const CREATE_REQUIRED: &str = "Title and content are required!";
pub const CREATE_FAILED: &str = "An error occurred while adding the post. Please try again.";
pub const UPDATE_REQUIRED: &str = "Title and content are required for update!";
pub const UPDATE_FAILED: &str = "An error occurred while updating the post. Please try again.";
pub const DELETE_FAILED: &str = "An error occurred while deleting the post. Please try again.";

/// Client controller: owns the API handle and the view state.
pub struct BlogApp<A: PostsApi> {
    api: A,
    state: ClientState,
}

impl<A: PostsApi> BlogApp<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ClientState::default(),
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn new_post_mut(&mut self) -> &mut PostDraft {
        &mut self.state.new_post
    }

    /// The edit draft, when a post is being edited.
    pub fn edit_draft_mut(&mut self) -> Option<&mut PostDraft> {
        self.state.editing.as_mut().map(|e| &mut e.draft)
    }

    /// Fetch the full list, replacing whatever is held locally.
    pub async fn load(&mut self) {
        match self.api.list_posts().await {
            Ok(posts) => {
                self.state.posts = posts;
                self.state.error = None;
            }
            Err(e) => {
                tracing::warn!("Error fetching posts: {}", e);
                self.state.set_error(FETCH_FAILED);
            }
        }
    }

    pub async fn submit_new_post(&mut self) {
        if !self.state.new_post.is_complete() {
            self.state.set_error(CREATE_REQUIRED);
            return;
        }

        let draft = &self.state.new_post;
        let payload = PostPayload::new(draft.title.as_str(), draft.content.as_str());
        match self.api.create_post(&payload).await {
            Ok(post) => {
                self.state.posts.push(post);
                self.state.new_post.clear();
                self.state.error = None;
            }
            Err(e) => {
                tracing::warn!("Error adding post: {}", e);
                self.state.set_error(CREATE_FAILED);
            }
        }
    }

    /// Open `id` in the edit form, replacing any edit in progress.
    ///
    /// Returns `false` when the post is not in the local list.
    pub fn start_editing(&mut self, id: Uuid) -> bool {
        let Some(post) = self.state.post(id) else {
            return false;
        };

        self.state.editing = Some(EditState {
            id,
            draft: PostDraft::from(post),
        });
        true
    }

    pub async fn submit_edit(&mut self) {
        let Some(editing) = &self.state.editing else {
            return;
        };
        if !editing.draft.is_complete() {
            self.state.set_error(UPDATE_REQUIRED);
            return;
        }

        let id = editing.id;
        let payload = PostPayload::new(editing.draft.title.as_str(), editing.draft.content.as_str());
        match self.api.update_post(id, &payload).await {
            Ok(Some(updated)) => {
                if let Some(slot) = self.state.posts.iter_mut().find(|p| p.id == id) {
                    *slot = updated;
                }
                self.state.editing = None;
                self.state.error = None;
            }
            Ok(None) => {
                tracing::debug!(post_id = %id, "Post vanished on the server");
                self.state.posts.retain(|p| p.id != id);
                self.state.editing = None;
                self.state.error = None;
            }
            Err(e) => {
                tracing::warn!("Error updating post: {}", e);
                self.state.set_error(UPDATE_FAILED);
            }
        }
    }

    /// Discard the edit form and its unsaved changes.
    pub fn cancel_edit(&mut self) {
        self.state.editing = None;
    }

    pub async fn delete_post(&mut self, id: Uuid) {
        match self.api.delete_post(id).await {
            Ok(_) => self.state.posts.retain(|p| p.id != id),
            Err(e) => {
                tracing::warn!("Error deleting post: {}", e);
                self.state.set_error(DELETE_FAILED);
            }
        }
    }
}
