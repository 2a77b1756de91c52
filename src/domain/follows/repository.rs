use async_trait::async_trait;

use super::Follows;
use crate::domain::{DomainResult, User};

#[async_trait]
pub trait FollowsRepository: Send + Sync {
    async fn insert(&self, edge: Follows) -> DomainResult<()>;
    /// Returns `false` when the edge did not exist.
    async fn delete(&self, edge: Follows) -> DomainResult<bool>;
    async fn exists(&self, edge: Follows) -> DomainResult<bool>;

    /// Users that `user_id` follows, ordered by id.
    async fn following(&self, user_id: i32) -> DomainResult<Vec<User>>;
    /// Users following `user_id`, ordered by id.
    async fn followers(&self, user_id: i32) -> DomainResult<Vec<User>>;

    async fn count_following(&self, user_id: i32) -> DomainResult<u64>;
    async fn count_followers(&self, user_id: i32) -> DomainResult<u64>;
}
