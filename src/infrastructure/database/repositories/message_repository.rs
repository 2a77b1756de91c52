use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::{db_err, write_err};
use crate::domain::{DomainResult, Like, Message, MessageRepository, NewMessageDto};
use crate::infrastructure::database::entities::{follows, likes, message};

pub struct SeaOrmMessageRepository {
    db: DatabaseConnection,
}

impl SeaOrmMessageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn message_model_to_domain(model: message::Model) -> Message {
    Message {
        id: model.id,
        text: model.text,
        timestamp: model.timestamp,
        user_id: model.user_id,
    }
}

#[async_trait]
impl MessageRepository for SeaOrmMessageRepository {
    async fn insert(&self, dto: NewMessageDto) -> DomainResult<Message> {
        let model = message::ActiveModel {
            text: Set(dto.text),
            timestamp: Set(dto.timestamp),
            user_id: Set(dto.user_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(write_err)?;

        Ok(message_model_to_domain(model))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Message>> {
        let model = message::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(message_model_to_domain))
    }

    async fn list_by_user(&self, user_id: i32) -> DomainResult<Vec<Message>> {
        let models = message::Entity::find()
            .filter(message::Column::UserId.eq(user_id))
            .order_by_desc(message::Column::Timestamp)
            .order_by_desc(message::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(message_model_to_domain).collect())
    }

    async fn count_by_user(&self, user_id: i32) -> DomainResult<u64> {
        message::Entity::find()
            .filter(message::Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        let result = message::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn timeline(&self, user_id: i32, limit: u64) -> DomainResult<Vec<Message>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        // Followed ids never enter the bind list
        let followed = Query::select()
            .column(follows::Column::UserBeingFollowedId)
            .from(follows::Entity)
            .and_where(follows::Column::UserFollowingId.eq(user_id))
            .to_owned();

        let models = message::Entity::find()
            .filter(
                Condition::any()
                    .add(message::Column::UserId.eq(user_id))
                    .add(message::Column::UserId.in_subquery(followed)),
            )
            .order_by_desc(message::Column::Timestamp)
            .order_by_desc(message::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(message_model_to_domain).collect())
    }

    async fn insert_like(&self, like: Like) -> DomainResult<()> {
        likes::ActiveModel {
            user_id: Set(like.user_id),
            message_id: Set(like.message_id),
        }
        .insert(&self.db)
        .await
        .map_err(write_err)?;

        Ok(())
    }

    async fn delete_like(&self, like: Like) -> DomainResult<bool> {
        let result = likes::Entity::delete_by_id((like.user_id, like.message_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn like_exists(&self, like: Like) -> DomainResult<bool> {
        let found = likes::Entity::find_by_id((like.user_id, like.message_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(found.is_some())
    }

    async fn liked_by(&self, user_id: i32) -> DomainResult<Vec<Message>> {
        let models = message::Entity::find()
            .join(JoinType::InnerJoin, message::Relation::Likes.def())
            .filter(likes::Column::UserId.eq(user_id))
            .order_by_desc(message::Column::Timestamp)
            .order_by_desc(message::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(message_model_to_domain).collect())
    }
}
