//! User management service — application-layer orchestration
//!
//! All user-related business logic lives here.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{NewUser, DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL};
use crate::domain::{
    DomainError, DomainResult, RepositoryProvider, SignupDto, UpdateProfileDto, User,
};
use crate::infrastructure::crypto::password::{hash_password_with_cost, verify_password};

/// User service — signup, authentication and profile maintenance.
pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, bcrypt_cost: u32) -> Self {
        Self { repos, bcrypt_cost }
    }

    fn hash(&self, password: &str) -> DomainResult<String> {
        hash_password_with_cost(password, self.bcrypt_cost)
            .map_err(|e| DomainError::Crypto(format!("Failed to hash password: {}", e)))
    }

    // ── Signup ──────────────────────────────────────────────────

    /// Hash the password and insert the user.
    ///
    /// A missing or duplicate username/email is rejected by the database
    /// and comes back as `DomainError::Integrity`.
    pub async fn signup(&self, dto: SignupDto) -> DomainResult<User> {
        if dto.password.is_empty() {
            return Err(DomainError::Validation("Password must not be empty".into()));
        }

        let password = self.hash(&dto.password)?;

        let user = self
            .repos
            .users()
            .insert(NewUser {
                username: dto.username,
                email: dto.email,
                password,
                image_url: dto.image_url.unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
                header_image_url: dto
                    .header_image_url
                    .unwrap_or_else(|| DEFAULT_HEADER_IMAGE_URL.to_string()),
                bio: dto.bio,
                location: dto.location,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "New user signed up");
        Ok(user)
    }

    // ── Authentication ──────────────────────────────────────────

    /// Find the user by `username` and check `password` against the stored hash.
    ///
    /// Returns `Ok(None)` for an unknown username or a wrong password.
    pub async fn authenticate(&self, username: &str, password: &str) -> DomainResult<Option<User>> {
        let Some(user) = self.repos.users().find_by_username(username).await? else {
            debug!(username, "Authentication failed: unknown user");
            return Ok(None);
        };

        // A hash that bcrypt cannot parse never matches
        if verify_password(password, &user.password).unwrap_or(false) {
            Ok(Some(user))
        } else {
            debug!(user_id = user.id, "Authentication failed: wrong password");
            Ok(None)
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn get_user(&self, id: i32) -> DomainResult<Option<User>> {
        self.repos.users().find_by_id(id).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        self.repos.users().find_by_username(username).await
    }

    /// Like `get_user_by_username`, but a missing user is an error.
    pub async fn require_user(&self, username: &str) -> DomainResult<User> {
        self.get_user_by_username(username)
            .await?
            .ok_or_else(|| DomainError::not_found("User", "username", username))
    }

    // ── Commands (mutations) ────────────────────────────────────

    pub async fn update_profile(&self, id: i32, dto: UpdateProfileDto) -> DomainResult<User> {
        let user = self
            .repos
            .users()
            .update_profile(id, dto)
            .await?
            .ok_or_else(|| DomainError::not_found("User", "id", id))?;

        info!(user_id = id, "Profile updated");
        Ok(user)
    }

    /// Change a user's password. Verifies the current password first.
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if new_password.is_empty() {
            return Err(DomainError::Validation(
                "New password must not be empty".into(),
            ));
        }

        let user = self
            .repos
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", "id", user_id))?;

        let valid = verify_password(current_password, &user.password).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("Invalid current password".into()));
        }

        let new_hash = self.hash(new_password)?;
        self.repos.users().update_password(user_id, &new_hash).await?;

        info!(user_id, "Password changed");
        Ok(())
    }

    /// Delete a user. Their messages, likes and follow edges go with them.
    pub async fn delete_user(&self, id: i32) -> DomainResult<()> {
        self.repos.users().delete(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::testing::{test_repos, TEST_BCRYPT_COST};

    async fn service() -> UserService {
        UserService::new(test_repos().await, TEST_BCRYPT_COST)
    }

    async fn signup(service: &UserService, username: &str, password: &str) -> User {
        service
            .signup(SignupDto::new(
                username,
                format!("{username}@test.com"),
                password,
            ))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn signup_with_valid_credentials() {
        let service = service().await;

        let created = service
            .signup(SignupDto {
                username: Some("user_test".into()),
                email: Some("usertest@f.com".into()),
                password: "password".into(),
                image_url: None,
                location: Some("canada".into()),
                bio: Some("Hi Its life".into()),
                header_image_url: None,
            })
            .await
            .unwrap();

        let user = service.get_user(created.id).await.unwrap().unwrap();
        assert_eq!(user.username, "user_test");
        assert_eq!(user.email, "usertest@f.com");
        assert_ne!(user.password, "password");
        assert!(user.password.starts_with("$2b$"));
        assert_eq!(user.image_url, DEFAULT_IMAGE_URL);
        assert_eq!(user.header_image_url, DEFAULT_HEADER_IMAGE_URL);
        assert_eq!(user.location.as_deref(), Some("canada"));
    }

    #[tokio::test]
    async fn signup_without_username_is_integrity_error() {
        let service = service().await;

        let err = service
            .signup(SignupDto {
                username: None,
                email: Some("usertest3@f.com".into()),
                password: "password".into(),
                location: Some("canada".into()),
                bio: Some("Hi Its life".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Integrity(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn signup_with_taken_username_is_integrity_error() {
        let service = service().await;
        signup(&service, "testuser1", "password").await;

        let err = service
            .signup(SignupDto::new("testuser1", "other@test.com", "password"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Integrity(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn signup_rejects_empty_password() {
        let service = service().await;
        let err = service
            .signup(SignupDto::new("testuser1", "testuser1@test.com", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn hashing_failure_is_crypto_error() {
        // bcrypt refuses work factors below 4
        let service = UserService::new(test_repos().await, 3);

        let err = service
            .signup(SignupDto::new("testuser1", "testuser1@test.com", "password"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Crypto(_)), "got {err:?}");
        assert_eq!(service.get_user_by_username("testuser1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn authenticate_with_correct_password() {
        let service = service().await;
        let user5 = signup(&service, "testuser5", "password").await;

        let found = service.authenticate("testuser5", "password").await.unwrap();
        assert_eq!(found, Some(user5));
    }

    #[tokio::test]
    async fn authenticate_with_unknown_username() {
        let service = service().await;
        signup(&service, "testuser5", "password").await;

        assert_eq!(service.authenticate("baduser", "password").await.unwrap(), None);
    }

    #[tokio::test]
    async fn authenticate_with_wrong_password() {
        let service = service().await;
        signup(&service, "testuser5", "password").await;

        assert_eq!(
            service.authenticate("testuser5", "wrongpassword").await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn change_password_requires_current_password() {
        let service = service().await;
        let user = signup(&service, "testuser1", "password").await;

        let err = service
            .change_password(user.id, "nope", "new-password")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));

        service
            .change_password(user.id, "password", "new-password")
            .await
            .unwrap();
        assert!(service.authenticate("testuser1", "password").await.unwrap().is_none());
        assert!(service.authenticate("testuser1", "new-password").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn update_profile_and_delete() {
        let service = service().await;
        let user = signup(&service, "testuser1", "password").await;

        let updated = service
            .update_profile(
                user.id,
                UpdateProfileDto {
                    username: Some("renamed".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.username, "renamed");
        assert!(service.require_user("renamed").await.is_ok());

        service.delete_user(user.id).await.unwrap();
        assert_eq!(service.get_user(user.id).await.unwrap(), None);
        assert!(matches!(
            service.delete_user(user.id).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service.update_profile(user.id, UpdateProfileDto::default()).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
