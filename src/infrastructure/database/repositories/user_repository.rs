use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use super::{db_err, write_err};
use crate::domain::user::NewUser;
use crate::domain::{DomainError, DomainResult, UpdateProfileDto, User, UserRepository};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(super) fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        username: model.username,
        image_url: model.image_url,
        header_image_url: model.header_image_url,
        bio: model.bio,
        location: model.location,
        password: model.password,
    }
}

fn user_not_found(id: i32) -> DomainError {
    DomainError::not_found("User", "id", id)
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        // Missing username/email stay NotSet so the NOT NULL constraint rejects the row
        let active = user::ActiveModel {
            id: NotSet,
            email: new_user.email.map_or(NotSet, Set),
            username: new_user.username.map_or(NotSet, Set),
            image_url: Set(new_user.image_url),
            header_image_url: Set(new_user.header_image_url),
            bio: Set(new_user.bio),
            location: Set(new_user.location),
            password: Set(new_user.password),
        };

        let model = active.insert(&self.db).await.map_err(write_err)?;
        Ok(user_model_to_domain(model))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn update_profile(&self, id: i32, dto: UpdateProfileDto) -> DomainResult<Option<User>> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        if dto.is_empty() {
            return Ok(Some(user_model_to_domain(existing)));
        }

        let mut active: user::ActiveModel = existing.into();

        if let Some(username) = dto.username {
            active.username = Set(username);
        }
        if let Some(email) = dto.email {
            active.email = Set(email);
        }
        if let Some(image_url) = dto.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(header_image_url) = dto.header_image_url {
            active.header_image_url = Set(header_image_url);
        }
        if let Some(bio) = dto.bio {
            active.bio = Set(Some(bio));
        }
        if let Some(location) = dto.location {
            active.location = Set(Some(location));
        }

        let updated = active.update(&self.db).await.map_err(write_err)?;

        Ok(Some(user_model_to_domain(updated)))
    }

    async fn update_password(&self, id: i32, password_hash: &str) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| user_not_found(id))?;

        let mut active: user::ActiveModel = existing.into();
        active.password = Set(password_hash.to_string());
        active.update(&self.db).await.map_err(db_err)?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL};
    use crate::support::testing::test_db;

    fn new_user(username: Option<&str>, email: Option<&str>) -> NewUser {
        NewUser {
            username: username.map(String::from),
            email: email.map(String::from),
            password: "HASHED_PASSWORD".into(),
            image_url: DEFAULT_IMAGE_URL.into(),
            header_image_url: DEFAULT_HEADER_IMAGE_URL.into(),
            bio: None,
            location: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_round_trips() {
        let repo = SeaOrmUserRepository::new(test_db().await);

        let created = repo
            .insert(new_user(Some("testuser1"), Some("testuser1@test.com")))
            .await
            .unwrap();
        assert!(created.id > 0);

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(
            repo.find_by_username("testuser1").await.unwrap(),
            Some(created)
        );
        assert_eq!(repo.find_by_username("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn missing_username_violates_not_null() {
        let repo = SeaOrmUserRepository::new(test_db().await);

        let err = repo
            .insert(new_user(None, Some("usertest3@f.com")))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Integrity(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn duplicate_email_violates_unique() {
        let repo = SeaOrmUserRepository::new(test_db().await);
        repo.insert(new_user(Some("a"), Some("same@test.com")))
            .await
            .unwrap();

        let err = repo
            .insert(new_user(Some("b"), Some("same@test.com")))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Integrity(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn update_profile_changes_only_given_fields() {
        let repo = SeaOrmUserRepository::new(test_db().await);
        let user = repo
            .insert(new_user(Some("testuser1"), Some("testuser1@test.com")))
            .await
            .unwrap();

        let updated = repo
            .update_profile(
                user.id,
                UpdateProfileDto {
                    bio: Some("Hi Its life".into()),
                    location: Some("canada".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.username, "testuser1");
        assert_eq!(updated.bio.as_deref(), Some("Hi Its life"));
        assert_eq!(updated.location.as_deref(), Some("canada"));

        assert_eq!(
            repo.update_profile(9999, UpdateProfileDto::default())
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn delete_missing_user_is_not_found() {
        let repo = SeaOrmUserRepository::new(test_db().await);
        assert!(matches!(
            repo.delete(5555).await,
            Err(DomainError::NotFound { entity: "User", .. })
        ));
    }
}
