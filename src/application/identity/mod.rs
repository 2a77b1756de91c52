//! Identity module — signup & authentication
//!
//! Contains the `UserService` which orchestrates all user-related
//! use-cases: signup, authentication, profile updates, password changes.

pub mod service;

pub use service::UserService;
