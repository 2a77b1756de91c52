/// Profile edit. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub header_image_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

impl UpdateProfileDto {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.image_url.is_none()
            && self.header_image_url.is_none()
            && self.bio.is_none()
            && self.location.is_none()
    }
}
