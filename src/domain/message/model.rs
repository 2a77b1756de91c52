use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{DomainError, DomainResult};

/// Longest message text, in characters.
pub const MAX_MESSAGE_LEN: usize = 140;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: i32,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewMessageDto {
    pub user_id: i32,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl NewMessageDto {
    /// Trims `text` and checks its length.
    pub fn new(user_id: i32, text: &str) -> DomainResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::Validation("Message text must not be empty".into()));
        }
        if text.chars().count() > MAX_MESSAGE_LEN {
            return Err(DomainError::Validation(format!(
                "Message text must be at most {} characters",
                MAX_MESSAGE_LEN
            )));
        }
        Ok(Self {
            user_id,
            text: text.to_string(),
            timestamp: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Like {
    pub user_id: i32,
    pub message_id: i32,
}
