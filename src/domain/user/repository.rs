use async_trait::async_trait;

use super::{UpdateProfileDto, User};
use crate::domain::DomainResult;

/// Row to insert. `password` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: String,
    pub image_url: String,
    pub header_image_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    async fn update_profile(&self, id: i32, dto: UpdateProfileDto) -> DomainResult<Option<User>>;
    async fn update_password(&self, id: i32, password_hash: &str) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
