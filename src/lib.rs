//! # Warbler
//!
//! Data model for the Warbler social network: users with bcrypt-hashed
//! passwords, messages, likes, and a self-referential follows relationship.
//!
//! ## Architecture
//!
//! - **domain**: Records, DTOs and repository traits
//! - **application**: Use-cases (signup, authentication, following, messaging)
//! - **infrastructure**: SeaORM entities, migrations, repositories, password hashing
//! - **support**: Error types
//! - **app**: Bootstrap and tracing setup

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod support;

pub use app::{init_tracing, Warbler};
pub use config::{default_config_path, AppConfig};
pub use support::errors::{AppError, DomainError, DomainResult, InfraError};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
