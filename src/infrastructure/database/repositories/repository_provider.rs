//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::follows::FollowsRepository;
use crate::domain::message::MessageRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::UserRepository;

use super::follows_repository::SeaOrmFollowsRepository;
use super::message_repository::SeaOrmMessageRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let user = repos.users().find_by_username("testuser1").await?;
/// let following = repos.follows().following(user_id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    follows: SeaOrmFollowsRepository,
    messages: SeaOrmMessageRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            follows: SeaOrmFollowsRepository::new(db.clone()),
            messages: SeaOrmMessageRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn follows(&self) -> &dyn FollowsRepository {
        &self.follows
    }

    fn messages(&self) -> &dyn MessageRepository {
        &self.messages
    }
}
