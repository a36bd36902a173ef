#[cfg(feature = "postgres")]
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

/// Configuration for the post store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Owned handle to the post store.
///
/// Created once at startup; repositories share the pool through `main` and
/// the pool is closed when the server shuts down.
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    pub main: Arc<DbConn>,
}

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Connect to the store and make sure the `posts` table exists.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        let connections = Self {
            main: Arc::new(main),
        };
        connections.ensure_schema().await?;
        Ok(connections)
    }

    /// Create the `posts` table from the entity definition if it is missing.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.main.get_database_backend();
        let mut create = Schema::new(backend).create_table_from_entity(super::entity::post::Entity);
        create.if_not_exists();

        self.main.execute(backend.build(&create)).await?;
        tracing::debug!("posts table ready");
        Ok(())
    }

    /// Close the connection pool.
    pub async fn close(&self) -> Result<(), DbErr> {
        self.main.close_by_ref().await?;
        tracing::info!("Database connection closed");
        Ok(())
    }
}
