use serde::Serialize;

/// A follower -> followed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Follows {
    pub user_being_followed_id: i32,
    pub user_following_id: i32,
}

impl Follows {
    pub fn new(follower_id: i32, followed_id: i32) -> Self {
        Self {
            user_being_followed_id: followed_id,
            user_following_id: follower_id,
        }
    }

    pub fn is_self_follow(&self) -> bool {
        self.user_being_followed_id == self.user_following_id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FollowCounts {
    pub following: u64,
    pub followers: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_follower_then_followed() {
        let edge = Follows::new(1, 2);
        assert_eq!(edge.user_following_id, 1);
        assert_eq!(edge.user_being_followed_id, 2);
        assert!(!edge.is_self_follow());
        assert!(Follows::new(3, 3).is_self_follow());
    }
}
