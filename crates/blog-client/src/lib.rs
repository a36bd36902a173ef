//! # Blog Client
//!
//! Single-view client for the blog API: an in-memory post list kept in sync
//! with the server through list/create/update/delete calls.

pub mod api;
pub mod app;
pub mod state;
pub mod view;

pub use api::{ApiError, HttpPostsApi, PostsApi};
pub use app::BlogApp;
pub use state::{ClientState, EditState};

pub use blog_core::domain::{Post, PostDraft};
