use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::ApiResult,
    latency::Latency,
    models::{NewWorkshop, RoadmapNode, Workshop, WorkshopStatus},
    seed,
    services::WorkshopApi,
    validation::invitation::validate_invitation_code,
};

/// 暂时只返回 ws_001 的数据用于演示 — the seed only carries nodes for the
/// first workshop, so every roadmap request is answered from it for now.
const ROADMAP_DEMO_WORKSHOP_ID: &str = "ws_001";

pub struct WorkshopService {
    latency: Latency,
}

impl WorkshopService {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl WorkshopApi for WorkshopService {
    async fn list(&self) -> ApiResult<Vec<Workshop>> {
        self.latency.wait().await;
        Ok(seed::workshops())
    }

    /// Absence is `None`, not an error.
    async fn get_by_id(&self, id: &str) -> ApiResult<Option<Workshop>> {
        self.latency.wait().await;
        Ok(seed::workshops().into_iter().find(|w| w.id == id))
    }

    async fn join(&self, code: &str) -> ApiResult<bool> {
        self.latency.wait().await;
        validate_invitation_code(code)?;
        tracing::debug!(code, "joined workshop");
        Ok(true)
    }

    /// Clones the first seed workshop as a template, overriding caller fields
    /// and defaulting the rest. The new workshop is not added to the seed
    /// collection, so a later `list()` will not include it — deliberate until
    /// real persistence exists.
    async fn create(&self, req: NewWorkshop) -> ApiResult<Workshop> {
        self.latency.wait().await;

        let mut workshop = seed::workshops()
            .into_iter()
            .next()
            .expect("seed carries at least one workshop");

        workshop.id = format!("ws_{}", Uuid::new_v4().simple());
        workshop.title = req.title.unwrap_or_else(|| "New Workshop".to_string());
        workshop.description = req
            .description
            .unwrap_or_else(|| "No description".to_string());
        workshop.code = req.code.unwrap_or_else(|| "000000".to_string());
        workshop.creator_id = req
            .creator_id
            .unwrap_or_else(|| seed::SEED_USER_ID.to_string());
        workshop.status = req.status.unwrap_or(WorkshopStatus::Draft);
        workshop.member_count = 1;
        workshop.created_at = Utc::now();

        tracing::debug!(id = %workshop.id, "created workshop");
        Ok(workshop)
    }

    /// Always serves the demo workshop's roadmap, whatever id was asked for.
    async fn roadmap(&self, workshop_id: &str) -> ApiResult<Vec<RoadmapNode>> {
        self.latency.wait().await;

        if workshop_id != ROADMAP_DEMO_WORKSHOP_ID {
            tracing::debug!(
                requested = workshop_id,
                served = ROADMAP_DEMO_WORKSHOP_ID,
                "serving demo roadmap"
            );
        }

        Ok(seed::roadmap_nodes()
            .into_iter()
            .filter(|node| node.workshop_id == ROADMAP_DEMO_WORKSHOP_ID)
            .collect())
    }
}
