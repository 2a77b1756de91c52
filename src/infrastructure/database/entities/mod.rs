//! Database entities module

pub mod follows;
pub mod likes;
pub mod message;
pub mod user;

pub use follows::Entity as Follows;
pub use likes::Entity as Likes;
pub use message::Entity as Message;
pub use user::Entity as User;
