//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_messages;
mod m20240101_000003_create_follows;
mod m20240101_000004_create_likes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_messages::Migration),
            Box::new(m20240101_000003_create_follows::Migration),
            Box::new(m20240101_000004_create_likes::Migration),
        ]
    }
}
