use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::user_repository::user_model_to_domain;
use super::{db_err, write_err};
use crate::domain::{DomainResult, Follows, FollowsRepository, User};
use crate::infrastructure::database::entities::{follows, user};

pub struct SeaOrmFollowsRepository {
    db: DatabaseConnection,
}

impl SeaOrmFollowsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn primary_key(edge: Follows) -> (i32, i32) {
        (edge.user_being_followed_id, edge.user_following_id)
    }
}

#[async_trait]
impl FollowsRepository for SeaOrmFollowsRepository {
    async fn insert(&self, edge: Follows) -> DomainResult<()> {
        follows::ActiveModel {
            user_being_followed_id: Set(edge.user_being_followed_id),
            user_following_id: Set(edge.user_following_id),
        }
        .insert(&self.db)
        .await
        .map_err(write_err)?;

        Ok(())
    }

    async fn delete(&self, edge: Follows) -> DomainResult<bool> {
        let result = follows::Entity::delete_by_id(Self::primary_key(edge))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn exists(&self, edge: Follows) -> DomainResult<bool> {
        let found = follows::Entity::find_by_id(Self::primary_key(edge))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(found.is_some())
    }

    async fn following(&self, user_id: i32) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .join(JoinType::InnerJoin, follows::Relation::Followed.def().rev())
            .filter(follows::Column::UserFollowingId.eq(user_id))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn followers(&self, user_id: i32) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .join(JoinType::InnerJoin, follows::Relation::Follower.def().rev())
            .filter(follows::Column::UserBeingFollowedId.eq(user_id))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn count_following(&self, user_id: i32) -> DomainResult<u64> {
        follows::Entity::find()
            .filter(follows::Column::UserFollowingId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn count_followers(&self, user_id: i32) -> DomainResult<u64> {
        follows::Entity::find()
            .filter(follows::Column::UserBeingFollowedId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::support::testing::{insert_user, test_db};

    #[tokio::test]
    async fn following_and_followers_walk_opposite_edges() {
        let db = test_db().await;
        let a = insert_user(&db, "testuser1").await;
        let b = insert_user(&db, "testuser2").await;
        let c = insert_user(&db, "testuser3").await;
        let repo = SeaOrmFollowsRepository::new(db);

        repo.insert(Follows::new(a.id, b.id)).await.unwrap();
        repo.insert(Follows::new(c.id, b.id)).await.unwrap();

        let following: Vec<i32> = repo.following(a.id).await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(following, vec![b.id]);

        let followers: Vec<i32> = repo.followers(b.id).await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(followers, vec![a.id, c.id]);

        assert!(repo.followers(a.id).await.unwrap().is_empty());
        assert_eq!(repo.count_followers(b.id).await.unwrap(), 2);
        assert_eq!(repo.count_following(b.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_reports_whether_edge_existed() {
        let db = test_db().await;
        let a = insert_user(&db, "testuser1").await;
        let b = insert_user(&db, "testuser2").await;
        let repo = SeaOrmFollowsRepository::new(db);

        let edge = Follows::new(a.id, b.id);
        repo.insert(edge).await.unwrap();
        assert!(repo.exists(edge).await.unwrap());
        assert!(!repo.exists(Follows::new(b.id, a.id)).await.unwrap());

        assert!(repo.delete(edge).await.unwrap());
        assert!(!repo.delete(edge).await.unwrap());
        assert!(!repo.exists(edge).await.unwrap());
    }

    #[tokio::test]
    async fn edge_to_unknown_user_violates_foreign_key() {
        let db = test_db().await;
        let a = insert_user(&db, "testuser1").await;
        let repo = SeaOrmFollowsRepository::new(db);

        let err = repo.insert(Follows::new(a.id, 5555)).await.unwrap_err();
        assert!(matches!(err, DomainError::Integrity(_)), "got {err:?}");
    }
}
