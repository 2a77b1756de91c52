//! Follow / unfollow and membership checks over the follows table.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    DomainError, DomainResult, FollowCounts, Follows, RepositoryProvider, User,
};

pub struct FollowService {
    repos: Arc<dyn RepositoryProvider>,
}

impl FollowService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    async fn ensure_user(&self, id: i32) -> DomainResult<()> {
        match self.repos.users().find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("User", "id", id)),
        }
    }

    /// `follower_id` starts following `followed_id`.
    pub async fn follow(&self, follower_id: i32, followed_id: i32) -> DomainResult<()> {
        let edge = Follows::new(follower_id, followed_id);
        if edge.is_self_follow() {
            return Err(DomainError::Validation("Users cannot follow themselves".into()));
        }

        self.ensure_user(follower_id).await?;
        self.ensure_user(followed_id).await?;

        if self.repos.follows().exists(edge).await? {
            return Err(DomainError::Conflict(format!(
                "User {} already follows user {}",
                follower_id, followed_id
            )));
        }

        self.repos.follows().insert(edge).await?;
        info!(follower_id, followed_id, "Follow added");
        Ok(())
    }

    pub async fn unfollow(&self, follower_id: i32, followed_id: i32) -> DomainResult<()> {
        let edge = Follows::new(follower_id, followed_id);
        if !self.repos.follows().delete(edge).await? {
            return Err(DomainError::NotFound {
                entity: "Follows",
                field: "pair",
                value: format!("{}->{}", follower_id, followed_id),
            });
        }

        info!(follower_id, followed_id, "Follow removed");
        Ok(())
    }

    /// Does `user_id` follow `other_id`?
    pub async fn is_following(&self, user_id: i32, other_id: i32) -> DomainResult<bool> {
        self.repos.follows().exists(Follows::new(user_id, other_id)).await
    }

    /// Is `user_id` followed by `other_id`?
    pub async fn is_followed_by(&self, user_id: i32, other_id: i32) -> DomainResult<bool> {
        self.repos.follows().exists(Follows::new(other_id, user_id)).await
    }

    pub async fn following(&self, user_id: i32) -> DomainResult<Vec<User>> {
        self.repos.follows().following(user_id).await
    }

    pub async fn followers(&self, user_id: i32) -> DomainResult<Vec<User>> {
        self.repos.follows().followers(user_id).await
    }

    pub async fn follow_counts(&self, user_id: i32) -> DomainResult<FollowCounts> {
        Ok(FollowCounts {
            following: self.repos.follows().count_following(user_id).await?,
            followers: self.repos.follows().count_followers(user_id).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::testing::{insert_user, test_db};
    use crate::infrastructure::SeaOrmRepositoryProvider;

    struct Fixture {
        service: FollowService,
        repos: Arc<dyn RepositoryProvider>,
        user1: User,
        user2: User,
    }

    async fn fixture() -> Fixture {
        let db = test_db().await;
        let user1 = insert_user(&db, "testuser1").await;
        let user2 = insert_user(&db, "testuser2").await;
        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db));
        Fixture {
            service: FollowService::new(repos.clone()),
            repos,
            user1,
            user2,
        }
    }

    #[tokio::test]
    async fn basic_user_model() {
        let Fixture {
            service,
            repos,
            user1,
            user2,
        } = fixture().await;

        service.follow(user1.id, user2.id).await.unwrap();

        // user1 has no messages and no followers
        assert_eq!(repos.messages().count_by_user(user1.id).await.unwrap(), 0);
        assert!(service.followers(user1.id).await.unwrap().is_empty());
        assert_eq!(
            user1.to_string(),
            format!("<User #{}: testuser1, testuser1@test.com>", user1.id)
        );
        assert!(service.is_following(user1.id, user2.id).await.unwrap());
        assert!(service.is_followed_by(user2.id, user1.id).await.unwrap());

        service.unfollow(user1.id, user2.id).await.unwrap();

        assert!(!service.is_following(user1.id, user2.id).await.unwrap());
        assert!(!service.is_followed_by(user2.id, user1.id).await.unwrap());
    }

    #[tokio::test]
    async fn following_is_directional() {
        let f = fixture().await;
        f.service.follow(f.user1.id, f.user2.id).await.unwrap();

        assert!(!f.service.is_following(f.user2.id, f.user1.id).await.unwrap());
        assert!(!f.service.is_followed_by(f.user1.id, f.user2.id).await.unwrap());
        assert_eq!(f.service.following(f.user1.id).await.unwrap(), vec![f.user2.clone()]);
        assert_eq!(f.service.followers(f.user2.id).await.unwrap(), vec![f.user1.clone()]);
        assert_eq!(
            f.service.follow_counts(f.user1.id).await.unwrap(),
            FollowCounts {
                following: 1,
                followers: 0
            }
        );
    }

    #[tokio::test]
    async fn duplicate_follow_is_conflict() {
        let f = fixture().await;
        f.service.follow(f.user1.id, f.user2.id).await.unwrap();

        assert!(matches!(
            f.service.follow(f.user1.id, f.user2.id).await,
            Err(DomainError::Conflict(_))
        ));
        assert_eq!(f.service.follow_counts(f.user2.id).await.unwrap().followers, 1);
    }

    #[tokio::test]
    async fn self_follow_and_unknown_users_are_rejected() {
        let f = fixture().await;

        assert!(matches!(
            f.service.follow(f.user1.id, f.user1.id).await,
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            f.service.follow(f.user1.id, 5555).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            f.service.unfollow(f.user1.id, f.user2.id).await,
            Err(DomainError::NotFound { entity: "Follows", .. })
        ));
    }

    #[tokio::test]
    async fn deleting_a_user_removes_their_edges() {
        let f = fixture().await;
        f.service.follow(f.user1.id, f.user2.id).await.unwrap();
        f.service.follow(f.user2.id, f.user1.id).await.unwrap();

        f.repos.users().delete(f.user2.id).await.unwrap();

        assert!(f.service.following(f.user1.id).await.unwrap().is_empty());
        assert!(f.service.followers(f.user1.id).await.unwrap().is_empty());
    }
}
