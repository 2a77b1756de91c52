use async_trait::async_trait;

use super::{Like, Message, NewMessageDto};
use crate::domain::DomainResult;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn insert(&self, dto: NewMessageDto) -> DomainResult<Message>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Message>>;
    /// Newest first.
    async fn list_by_user(&self, user_id: i32) -> DomainResult<Vec<Message>>;
    async fn count_by_user(&self, user_id: i32) -> DomainResult<u64>;
    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: i32) -> DomainResult<bool>;

    /// Messages written by `user_id` or by anyone `user_id` follows, newest first.
    async fn timeline(&self, user_id: i32, limit: u64) -> DomainResult<Vec<Message>>;

    async fn insert_like(&self, like: Like) -> DomainResult<()>;
    async fn delete_like(&self, like: Like) -> DomainResult<bool>;
    async fn like_exists(&self, like: Like) -> DomainResult<bool>;
    /// Messages liked by `user_id`, newest first.
    async fn liked_by(&self, user_id: i32) -> DomainResult<Vec<Message>>;
}
