#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::database::DatabaseConnections;
    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;
    use blog_core::domain::{Post, PostChanges};
    use blog_core::ports::{BaseRepository, PostRepository};
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};

    fn model(title: &str, content: &str) -> post::Model {
        post::Model {
            id: uuid::Uuid::new_v4(),
            title: title.to_owned(),
            content: content.to_owned(),
            created_at: chrono::Utc::now().into(),
            updated_at: None,
        }
    }

    fn statements(db: Arc<DatabaseConnection>) -> String {
        match Arc::try_unwrap(db) {
            Ok(db) => format!("{:?}", db.into_transaction_log()),
            Err(_) => panic!("connection still shared"),
        }
    }

    #[tokio::test]
    async fn test_find_all_posts() {
        let first = model("A", "B");
        let second = model("C", "D");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![first.clone(), second.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));
        let posts = repo.find_all().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, first.id);
        assert_eq!(posts[1].title, "C");
        assert!(posts[0].updated_at.is_none());
    }

    #[tokio::test]
    async fn test_insert_post() {
        let stored = model("Test Post", "Content");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));
        let post: Post = repo.insert(stored.clone().into()).await.unwrap();

        assert_eq!(post.id, stored.id);
        assert_eq!(post.title, "Test Post");
    }

    #[tokio::test]
    async fn test_update_missing_post_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));
        let result = repo
            .update(uuid::Uuid::new_v4(), PostChanges::new("C", "D"))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_existing_post() {
        let existing = model("A", "B");
        let mut updated = existing.clone();
        updated.title = "C".to_owned();
        updated.content = "D".to_owned();
        updated.updated_at = Some(chrono::Utc::now().into());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![updated]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));
        let post = repo
            .update(existing.id, PostChanges::new("C", "D"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(post.id, existing.id);
        assert_eq!(post.title, "C");
        assert_eq!(post.content, "D");
        assert!(post.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_partial_update_sets_only_given_columns() {
        let mut updated = model("C", "B");
        updated.updated_at = Some(chrono::Utc::now().into());

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![updated.clone()]])
                .into_connection(),
        );

        let repo = PostgresPostRepository::new(db.clone());
        let changes = PostChanges {
            title: Some("C".to_owned()),
            content: None,
        };
        repo.update(updated.id, changes).await.unwrap();
        drop(repo);

        let log = statements(db);
        assert_eq!(log.matches("UPDATE").count(), 1);
        assert!(!log.contains("SELECT"));
        assert!(log.contains(r#"\"title\" = "#));
        assert!(!log.contains(r#"\"content\" = "#));
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));
        let result: Result<(), _> = BaseRepository::<Post, uuid::Uuid>::delete(&repo, uuid::Uuid::new_v4()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_ensure_schema_issues_one_statement() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let connections = DatabaseConnections { main: Arc::new(db) };
        connections.ensure_schema().await.unwrap();

        let log = statements(connections.main);
        assert!(log.contains("CREATE TABLE IF NOT EXISTS"));
    }
}
