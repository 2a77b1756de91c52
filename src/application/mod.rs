//! Application layer - use-cases over the domain repositories

pub mod identity;
pub mod social;

pub use identity::UserService;
pub use social::{FollowService, MessageService, DEFAULT_TIMELINE_LIMIT};
