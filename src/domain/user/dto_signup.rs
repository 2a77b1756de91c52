/// Input for `UserService::signup`.
///
/// `username` and `email` stay optional so that a missing value reaches the
/// database and is rejected there, like any other constraint violation.
#[derive(Debug, Clone, Default)]
pub struct SignupDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub header_image_url: Option<String>,
}

impl SignupDto {
    pub fn new(username: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            email: Some(email.into()),
            password: password.into(),
            ..Default::default()
        }
    }
}
