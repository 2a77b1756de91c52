//! Posting, reading and liking messages.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    DomainError, DomainResult, Like, Message, NewMessageDto, RepositoryProvider,
};

/// Home timeline size when the caller does not ask for one.
pub const DEFAULT_TIMELINE_LIMIT: u64 = 100;

pub struct MessageService {
    repos: Arc<dyn RepositoryProvider>,
}

impl MessageService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    async fn require_message(&self, id: i32) -> DomainResult<Message> {
        self.repos
            .messages()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Message", "id", id))
    }

    pub async fn post(&self, user_id: i32, text: &str) -> DomainResult<Message> {
        let dto = NewMessageDto::new(user_id, text)?;

        if self.repos.users().find_by_id(user_id).await?.is_none() {
            return Err(DomainError::not_found("User", "id", user_id));
        }

        let message = self.repos.messages().insert(dto).await?;
        info!(user_id, message_id = message.id, "Message posted");
        Ok(message)
    }

    pub async fn get_message(&self, id: i32) -> DomainResult<Option<Message>> {
        self.repos.messages().find_by_id(id).await
    }

    pub async fn messages_for_user(&self, user_id: i32) -> DomainResult<Vec<Message>> {
        self.repos.messages().list_by_user(user_id).await
    }

    /// Only the author may delete a message.
    pub async fn delete_message(&self, user_id: i32, message_id: i32) -> DomainResult<()> {
        let message = self.require_message(message_id).await?;
        if message.user_id != user_id {
            return Err(DomainError::Forbidden(format!(
                "Message {} belongs to another user",
                message_id
            )));
        }

        self.repos.messages().delete(message_id).await?;
        info!(user_id, message_id, "Message deleted");
        Ok(())
    }

    /// The user's own messages plus those of everyone they follow, newest first.
    pub async fn timeline(&self, user_id: i32, limit: Option<u64>) -> DomainResult<Vec<Message>> {
        self.repos
            .messages()
            .timeline(user_id, limit.unwrap_or(DEFAULT_TIMELINE_LIMIT))
            .await
    }

    /// Like or unlike; returns whether the message is liked afterwards.
    pub async fn toggle_like(&self, user_id: i32, message_id: i32) -> DomainResult<bool> {
        let message = self.require_message(message_id).await?;
        if message.user_id == user_id {
            return Err(DomainError::Forbidden("Users cannot like their own messages".into()));
        }

        let like = Like { user_id, message_id };
        if self.repos.messages().delete_like(like).await? {
            info!(user_id, message_id, "Like removed");
            return Ok(false);
        }

        self.repos.messages().insert_like(like).await?;
        info!(user_id, message_id, "Like added");
        Ok(true)
    }

    pub async fn likes(&self, user_id: i32) -> DomainResult<Vec<Message>> {
        self.repos.messages().liked_by(user_id).await
    }

    pub async fn is_liked(&self, user_id: i32, message_id: i32) -> DomainResult<bool> {
        self.repos
            .messages()
            .like_exists(Like { user_id, message_id })
            .await
    }
}
