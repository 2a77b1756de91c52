//! Create follows table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Follows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Follows::UserBeingFollowedId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Follows::UserFollowingId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_follows")
                            .col(Follows::UserBeingFollowedId)
                            .col(Follows::UserFollowingId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follows_user_being_followed_id")
                            .from(Follows::Table, Follows::UserBeingFollowedId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follows_user_following_id")
                            .from(Follows::Table, Follows::UserFollowingId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The primary key covers lookups by followed user; this one covers "who do I follow"
        manager
            .create_index(
                Index::create()
                    .name("idx_follows_user_following_id")
                    .table(Follows::Table)
                    .col(Follows::UserFollowingId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Follows::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Follows {
    Table,
    UserBeingFollowedId,
    UserFollowingId,
}
