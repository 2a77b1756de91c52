//! Create users table

use sea_orm_migration::prelude::*;

use crate::domain::user::{DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Email).text().not_null().unique_key())
                    .col(ColumnDef::new(Users::Username).text().not_null().unique_key())
                    .col(
                        ColumnDef::new(Users::ImageUrl)
                            .text()
                            .not_null()
                            .default(DEFAULT_IMAGE_URL),
                    )
                    .col(
                        ColumnDef::new(Users::HeaderImageUrl)
                            .text()
                            .not_null()
                            .default(DEFAULT_HEADER_IMAGE_URL),
                    )
                    .col(ColumnDef::new(Users::Bio).text().null())
                    .col(ColumnDef::new(Users::Location).text().null())
                    .col(ColumnDef::new(Users::Password).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Users {
    Table,
    Id,
    Email,
    Username,
    ImageUrl,
    HeaderImageUrl,
    Bio,
    Location,
    Password,
}
