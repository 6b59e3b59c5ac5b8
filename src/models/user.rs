use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

// User models
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Partial update for a profile. Only fields a user can edit are listed;
/// `id`, `role` and `created_at` are not updatable through this surface.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct UserProfileUpdate {
    pub email: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}

impl UserProfile {
    /// 将部分字段覆盖到当前档案上，返回新值，不修改原值。
    pub fn merge(&self, update: &UserProfileUpdate) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            email: update.email.clone().unwrap_or_else(|| self.email.clone()),
            username: update
                .username
                .clone()
                .unwrap_or_else(|| self.username.clone()),
            avatar_url: update.avatar_url.clone().or_else(|| self.avatar_url.clone()),
            bio: update.bio.clone().or_else(|| self.bio.clone()),
            role: self.role,
            created_at: self.created_at,
        }
    }
}
