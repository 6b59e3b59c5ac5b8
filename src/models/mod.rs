pub mod roadmap;
pub mod user;
pub mod workshop;

pub use roadmap::{NodeStatus, RoadmapNode};
pub use user::{UserProfile, UserProfileUpdate, UserRole};
pub use workshop::{NewWorkshop, Workshop, WorkshopStatus};
