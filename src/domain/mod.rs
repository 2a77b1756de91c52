//! Domain layer: records, input DTOs and repository interfaces.

pub mod follows;
pub mod message;
pub mod repositories;
pub mod user;

pub use follows::{FollowCounts, Follows, FollowsRepository};
pub use message::{Like, Message, MessageRepository, NewMessageDto, MAX_MESSAGE_LEN};
pub use repositories::RepositoryProvider;
pub use user::{SignupDto, UpdateProfileDto, User, UserRepository};

pub use crate::support::errors::{DomainError, DomainResult};
