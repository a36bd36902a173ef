//! Network access to the posts API.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use blog_core::domain::Post;
use blog_shared::{MessageResponse, PostPayload};

/// Failures of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server answered {status}: {message}")]
    Status { status: u16, message: String },
}

/// The four calls the client makes.
#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    async fn create_post(&self, payload: &PostPayload) -> Result<Post, ApiError>;

    /// `None` when the server no longer knows the post.
    async fn update_post(&self, id: Uuid, payload: &PostPayload) -> Result<Option<Post>, ApiError>;

    async fn delete_post(&self, id: Uuid) -> Result<MessageResponse, ApiError>;
}

/// `PostsApi` over HTTP/JSON. No request timeout is applied.
#[derive(Debug, Clone)]
pub struct HttpPostsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPostsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn post_url(&self, id: Uuid) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    /// Turn a non-2xx answer into `ApiError::Status`, keeping the server's message.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = match resp.json::<MessageResponse>().await {
            Ok(body) => body.message,
            Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
        };
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let resp = self.client.get(self.posts_url()).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn create_post(&self, payload: &PostPayload) -> Result<Post, ApiError> {
        let resp = self.client.post(self.posts_url()).json(payload).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn update_post(&self, id: Uuid, payload: &PostPayload) -> Result<Option<Post>, ApiError> {
        let resp = self.client.put(self.post_url(id)).json(payload).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn delete_post(&self, id: Uuid) -> Result<MessageResponse, ApiError> {
        let resp = self.client.delete(self.post_url(id)).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }
}
