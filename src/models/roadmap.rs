use serde::{Deserialize, Serialize};

/// Node progression status. Variant order matters: a later node is never
/// further along than an earlier one, so the derived ordering follows the
/// unlock sequence. The mock serves the statuses as seeded and does not
/// enforce transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Locked,
    Pending,
    InProgress,
    Completed,
}

// Roadmap models
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoadmapNode {
    pub id: String,
    /// Weak reference to a Workshop id; not enforced anywhere.
    pub workshop_id: String,
    pub title: String,
    pub description: String,
    pub status: NodeStatus,
    /// Sequence position within the workshop, unique per workshop.
    pub order: i32,
    /// 用户填写的内容
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
