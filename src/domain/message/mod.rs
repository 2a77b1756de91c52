//! Message aggregate: messages and the likes on them.

pub mod model;
pub mod repository;

pub use model::{Like, Message, NewMessageDto, MAX_MESSAGE_LEN};
pub use repository::MessageRepository;
