//! Bootstrap: tracing, database connection, migrations and services.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::application::{FollowService, MessageService, UserService};
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, SeaOrmRepositoryProvider};
use crate::support::errors::{AppError, InfraError};

/// Initialise the global tracing subscriber from the logging section.
///
/// `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

/// Connected, migrated application with its services.
pub struct Warbler {
    pub db: DatabaseConnection,
    pub users: UserService,
    pub follows: FollowService,
    pub messages: MessageService,
}

impl Warbler {
    /// Connect to the configured database and run pending migrations.
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        config.validate().map_err(InfraError::from)?;

        let db = init_database(&config.database_config()).await?;

        info!("Running database migrations...");
        Migrator::up(&db, None).await?;
        info!("Migrations completed");

        Ok(Self::from_connection(db, config.security.bcrypt_cost))
    }

    /// Build services over an existing (already migrated) connection.
    pub fn from_connection(db: DatabaseConnection, bcrypt_cost: u32) -> Self {
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

        Self {
            users: UserService::new(repos.clone(), bcrypt_cost),
            follows: FollowService::new(repos.clone()),
            messages: MessageService::new(repos),
            db,
        }
    }
}
