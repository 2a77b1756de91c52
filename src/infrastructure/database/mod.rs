pub mod entities;
pub mod migrator;
pub mod repositories;

pub use repositories::SeaOrmRepositoryProvider;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./warbler.db?mode=rwc")
    pub url: String,
    /// Pool size; `None` keeps the driver default
    pub max_connections: Option<u32>,
}

impl DatabaseConfig {
    /// Private in-memory SQLite database. Pinned to one connection, since
    /// every new SQLite connection to `:memory:` opens an empty database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
        }
    }

    fn is_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);

    let mut options = ConnectOptions::new(config.url.clone());
    options.sqlx_logging(false);
    if let Some(max) = config.max_connections {
        options.max_connections(max);
    }
    if config.is_memory() {
        options.min_connections(1).max_connections(1);
    }

    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}
