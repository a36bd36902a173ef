//! In-memory post repository - used when no database is configured.
//!
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Post, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// Post store backed by a `Vec`, which keeps insertion order for listing.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Constraint(format!("duplicate post id {}", post.id)));
        }

        posts.push(post.clone());
        tracing::debug!(post_id = %post.id, "Post stored in memory");
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        posts.retain(|p| p.id != id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        // Lookup and write happen under one lock.
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        post.apply(changes);
        Ok(Some(post.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, content: &str) -> Post {
        Post::new(title.to_string(), content.to_string())
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = InMemoryPostRepository::new();
        let first = repo.insert(post("A", "B")).await.unwrap();
        let second = repo.insert(post("C", "D")).await.unwrap();

        let ids: Vec<Uuid> = repo.find_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_rejected() {
        let repo = InMemoryPostRepository::new();
        let p = repo.insert(post("A", "B")).await.unwrap();

        let err = repo.insert(p).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[tokio::test]
    async fn test_update_touches_only_target() {
        let repo = InMemoryPostRepository::new();
        let target = repo.insert(post("A", "B")).await.unwrap();
        let other = repo.insert(post("X", "Y")).await.unwrap();

        let updated = repo
            .update(target.id, PostChanges::new("C", "D"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "C");
        assert!(updated.updated_at.unwrap() >= updated.created_at);

        let untouched = repo.find_by_id(other.id).await.unwrap().unwrap();
        assert_eq!(untouched, other);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryPostRepository::new();
        let result = repo
            .update(Uuid::new_v4(), PostChanges::new("C", "D"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let repo = InMemoryPostRepository::new();
        let p = repo.insert(post("A", "B")).await.unwrap();

        repo.update(p.id, PostChanges::new("first", "1")).await.unwrap();
        repo.update(p.id, PostChanges::new("second", "2")).await.unwrap();

        let posts = repo.find_all().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "second");
        assert_eq!(posts[0].content, "2");
    }

    #[tokio::test]
    async fn test_partial_updates_do_not_revert_each_other() {
        let repo = InMemoryPostRepository::new();
        let p = repo.insert(post("A", "B")).await.unwrap();

        let title_only = PostChanges {
            title: Some("C".to_string()),
            content: None,
        };
        let content_only = PostChanges {
            title: None,
            content: Some("D".to_string()),
        };
        let (a, b) = tokio::join!(
            repo.update(p.id, title_only),
            repo.update(p.id, content_only)
        );
        a.unwrap();
        b.unwrap();

        let stored = repo.find_by_id(p.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "C");
        assert_eq!(stored.content, "D");
    }

    #[tokio::test]
    async fn test_delete_is_silent_for_missing_id() {
        let repo = InMemoryPostRepository::new();
        let p = repo.insert(post("A", "B")).await.unwrap();

        repo.delete(Uuid::new_v4()).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);

        repo.delete(p.id).await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
