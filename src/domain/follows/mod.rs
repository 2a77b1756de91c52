//! Follows aggregate: who follows whom.

pub mod model;
pub mod repository;

pub use model::{FollowCounts, Follows};
pub use repository::FollowsRepository;
