pub mod auth_service;
pub mod workshop_service;

pub use auth_service::AuthService;
pub use workshop_service::WorkshopService;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{NewWorkshop, RoadmapNode, UserProfile, UserProfileUpdate, Workshop};

/// Auth surface. Method signatures are the contract a real backend client
/// must honor when it replaces the mock.
#[async_trait]
pub trait AuthApi {
    async fn login(&self, email: &str) -> ApiResult<UserProfile>;
    async fn current_user(&self) -> ApiResult<UserProfile>;
    async fn update_profile(&self, update: UserProfileUpdate) -> ApiResult<UserProfile>;
}

/// Workshop surface, same deal.
#[async_trait]
pub trait WorkshopApi {
    async fn list(&self) -> ApiResult<Vec<Workshop>>;
    async fn get_by_id(&self, id: &str) -> ApiResult<Option<Workshop>>;
    async fn join(&self, code: &str) -> ApiResult<bool>;
    async fn create(&self, req: NewWorkshop) -> ApiResult<Workshop>;
    async fn roadmap(&self, workshop_id: &str) -> ApiResult<Vec<RoadmapNode>>;
}
