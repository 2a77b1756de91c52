//! Shared fixtures for database-backed tests.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

use crate::domain::user::{NewUser, DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL};
use crate::domain::{RepositoryProvider, User};
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

/// Cheapest work factor bcrypt accepts; keeps hashing fast in tests.
pub(crate) const TEST_BCRYPT_COST: u32 = 4;

/// Fresh, migrated in-memory SQLite database.
pub async fn test_db() -> DatabaseConnection {
    let db = init_database(&DatabaseConfig::in_memory())
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub async fn test_repos() -> Arc<dyn RepositoryProvider> {
    Arc::new(SeaOrmRepositoryProvider::new(test_db().await))
}

/// Insert `username` with email `{username}@test.com` and a placeholder password hash.
pub async fn insert_user(db: &DatabaseConnection, username: &str) -> User {
    SeaOrmRepositoryProvider::new(db.clone())
        .users()
        .insert(NewUser {
            username: Some(username.to_string()),
            email: Some(format!("{username}@test.com")),
            password: "HASHED_PASSWORD".to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            header_image_url: DEFAULT_HEADER_IMAGE_URL.to_string(),
            bio: None,
            location: None,
        })
        .await
        .expect("insert fixture user")
}
