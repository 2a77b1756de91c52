//! Follows entity: self-referential users <-> users association

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "follows")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_being_followed_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_following_id: i32,
}

// Both edges point at `users`, so there is no `Related<user::Entity>` impl;
// queries join through `Relation::Followed` / `Relation::Follower` explicitly.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserBeingFollowedId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Followed,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserFollowingId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Follower,
}

impl ActiveModelBehavior for ActiveModel {}
