//! Social graph and messaging use-cases.

pub mod follow_service;
pub mod message_service;

pub use follow_service::FollowService;
pub use message_service::{MessageService, DEFAULT_TIMELINE_LIMIT};
