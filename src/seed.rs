//! Static seed dataset standing in for the real backend's persisted state.
//!
//! Every function builds the records fresh on each call. Callers therefore
//! always see the pristine dataset: "updates" produced elsewhere never leak
//! back in here.

use chrono::{DateTime, Utc};

use crate::models::{NodeStatus, RoadmapNode, UserProfile, UserRole, Workshop, WorkshopStatus};

pub const SEED_USER_ID: &str = "user_001";

fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("seed timestamp is valid RFC 3339")
}

// 模拟当前用户
pub fn user() -> UserProfile {
    UserProfile {
        id: SEED_USER_ID.to_string(),
        email: "frank@juanleme.com".to_string(),
        username: "坏胖胖".to_string(),
        avatar_url: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Frank".to_string()),
        bio: Some("Vibe Coding 首席体验官".to_string()),
        role: UserRole::User,
        created_at: ts("2024-01-01T00:00:00Z"),
    }
}

// 模拟工作坊列表
pub fn workshops() -> Vec<Workshop> {
    vec![
        Workshop {
            id: "ws_001".to_string(),
            title: "周三下午搓个垃圾出来".to_string(),
            description: "别想太多，先动手做。不管是垃圾还是宝贝，做出来再说！适合所有想要尝试 Vibe Coding 的新手。"
                .to_string(),
            cover_url: Some(
                "https://images.unsplash.com/photo-1517048676732-d65bc937f952?w=800&q=80"
                    .to_string(),
            ),
            code: "888888".to_string(),
            creator_id: "admin_001".to_string(),
            status: WorkshopStatus::Active,
            created_at: ts("2024-03-20T10:00:00Z"),
            member_count: 42,
            is_joined: Some(true),
        },
        Workshop {
            id: "ws_002".to_string(),
            title: "AI 艺术创作工坊".to_string(),
            description: "探索 Midjourney 和 Stable Diffusion 的无限可能。".to_string(),
            cover_url: Some(
                "https://images.unsplash.com/photo-1547891654-e66ed7ebb968?w=800&q=80".to_string(),
            ),
            code: "123456".to_string(),
            creator_id: "admin_002".to_string(),
            status: WorkshopStatus::Active,
            created_at: ts("2024-03-22T14:00:00Z"),
            member_count: 15,
            is_joined: Some(false),
        },
        Workshop {
            id: "ws_003".to_string(),
            title: "旧项目复盘大会".to_string(),
            description: "把那些烂尾的项目拿出来晒晒，说不定能废物利用。".to_string(),
            cover_url: Some(
                "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?w=800&q=80".to_string(),
            ),
            code: "654321".to_string(),
            creator_id: "user_001".to_string(),
            status: WorkshopStatus::Completed,
            created_at: ts("2024-03-01T09:00:00Z"),
            member_count: 8,
            is_joined: Some(true),
        },
    ]
}

// 模拟路线图节点
pub fn roadmap_nodes() -> Vec<RoadmapNode> {
    vec![
        RoadmapNode {
            id: "node_1".to_string(),
            workshop_id: "ws_001".to_string(),
            title: "👋 破冰环节：自我介绍".to_string(),
            description: "用一句话介绍你自己，并说出你最想做的一个“垃圾”项目。".to_string(),
            status: NodeStatus::Completed,
            order: 1,
            content: Some(
                "大家好，我是 Trae。我想做一个自动给猫铲屎的机器人，但是是用乐高拼的。".to_string(),
            ),
        },
        RoadmapNode {
            id: "node_2".to_string(),
            workshop_id: "ws_001".to_string(),
            title: "🧠 头脑风暴：疯狂的点子".to_string(),
            description: "不要管可行性，写下 3 个你觉得最离谱的想法。".to_string(),
            status: NodeStatus::InProgress,
            order: 2,
            content: Some(String::new()),
        },
        RoadmapNode {
            id: "node_3".to_string(),
            workshop_id: "ws_001".to_string(),
            title: "🎨 原型设计：草图绘制".to_string(),
            description: "拿出纸和笔，画出你的产品原型。不要在意美丑，关键是逻辑。".to_string(),
            status: NodeStatus::Pending,
            order: 3,
            content: None,
        },
        RoadmapNode {
            id: "node_4".to_string(),
            workshop_id: "ws_001".to_string(),
            title: "💻 核心代码实现".to_string(),
            description: "选择一个核心功能，用最脏的代码把它跑通。".to_string(),
            status: NodeStatus::Locked,
            order: 4,
            content: None,
        },
        RoadmapNode {
            id: "node_5".to_string(),
            workshop_id: "ws_001".to_string(),
            title: "🎉 展示与庆祝".to_string(),
            description: "向大家展示你的成果，哪怕它只是一个 Hello World。".to_string(),
            status: NodeStatus::Locked,
            order: 5,
            content: None,
        },
    ]
}
