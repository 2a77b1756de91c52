//! User aggregate
//!
//! Contains the User record, DTOs, and repository interface.

pub mod model;
pub mod repository;

mod dto_signup;
mod dto_update;

pub use model::{User, DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL};

pub use dto_signup::SignupDto;
pub use dto_update::UpdateProfileDto;

pub use repository::{NewUser, UserRepository};
