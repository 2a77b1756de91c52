//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod follows_repository;
pub mod message_repository;
pub mod repository_provider;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

// ── Error mapping ───────────────────────────────────────────────

pub(crate) fn db_err(e: DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Map a failed INSERT/UPDATE: constraint violations become `Integrity`.
pub(crate) fn write_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::Integrity(msg),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => DomainError::Integrity(msg),
        _ => {
            let msg = e.to_string();
            if msg.contains("NOT NULL") || msg.contains("UNIQUE") || msg.contains("FOREIGN KEY") {
                DomainError::Integrity(msg)
            } else {
                db_err(e)
            }
        }
    }
}
