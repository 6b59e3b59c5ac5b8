use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkshopStatus {
    Draft,
    Active,
    Completed,
}

// Workshop models
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Workshop {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// 6 位邀请码
    pub code: String,
    /// Weak reference to a UserProfile id; not enforced anywhere.
    pub creator_id: String,
    pub status: WorkshopStatus,
    pub created_at: DateTime<Utc>,
    pub member_count: u32,
    /// 当前用户是否已加入 — viewer-relative, not a property of the workshop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_joined: Option<bool>,
}

/// Create request. Every field is independently defaulted when absent.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct NewWorkshop {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub creator_id: Option<String>,
    pub status: Option<WorkshopStatus>,
}
