//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use blog_core::domain::{Post, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::CreatedAt)
            .order_by_asc(post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(repo_error)?;

        tracing::debug!(count = result.len(), "Listed posts");
        Ok(result.into_iter().map(Into::into).collect())
    }

    /// One `UPDATE ... RETURNING`; absent fields stay out of the SET list.
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        let patch = post::ActiveModel {
            id: NotSet,
            title: changes.title.map_or(NotSet, Set),
            content: changes.content.map_or(NotSet, Set),
            created_at: NotSet,
            updated_at: Set(Some(chrono::Utc::now().into())),
        };

        let rows = PostEntity::update_many()
            .set(patch)
            .filter(post::Column::Id.eq(id))
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(repo_error)?;

        Ok(rows.into_iter().next().map(Into::into))
    }
}
