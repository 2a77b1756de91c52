//! Repository traits for the domain layer
//!
//! `RepositoryProvider` gives unified access to all per-aggregate repositories.

use super::follows::FollowsRepository;
use super::message::MessageRepository;
use super::user::UserRepository;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let user = repos.users().find_by_username("testuser1").await?;
///     let following = repos.follows().following(user_id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn follows(&self) -> &dyn FollowsRepository;
    fn messages(&self) -> &dyn MessageRepository;
}
