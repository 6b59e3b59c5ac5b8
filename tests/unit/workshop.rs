use chrono::Utc;
use workshop_mock::MockApi;
use workshop_mock::error::ApiError;
use workshop_mock::latency::Latency;
use workshop_mock::models::{NewWorkshop, WorkshopStatus};
use workshop_mock::services::WorkshopApi;

fn api() -> MockApi {
    MockApi::with_latency(Latency::zero())
}

#[tokio::test]
async fn list_returns_all_seed_workshops_in_order() {
    let workshops = api().workshop.list().await.unwrap();
    let ids: Vec<&str> = workshops.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, ["ws_001", "ws_002", "ws_003"]);
}

#[tokio::test]
async fn get_by_id_finds_every_seed_workshop() {
    let api = api();
    for id in ["ws_001", "ws_002", "ws_003"] {
        let found = api.workshop.get_by_id(id).await.unwrap();
        assert_eq!(found.map(|w| w.id), Some(id.to_string()));
    }
}

#[tokio::test]
async fn get_by_id_returns_none_for_unknown_id() {
    assert!(api().workshop.get_by_id("ws_999").await.unwrap().is_none());
}

#[tokio::test]
async fn join_accepts_six_character_codes_only() {
    let api = api();
    assert!(api.workshop.join("888888").await.unwrap());

    let short = api.workshop.join("12345").await.unwrap_err();
    assert!(matches!(short, ApiError::InvalidInvitationCode { .. }));

    let long = api.workshop.join("1234567").await.unwrap_err();
    assert!(matches!(long, ApiError::InvalidInvitationCode { .. }));
}

#[tokio::test]
async fn create_applies_defaults_for_absent_fields() {
    let before = Utc::now();
    let created = api().workshop.create(NewWorkshop::default()).await.unwrap();

    assert_eq!(created.title, "New Workshop");
    assert_eq!(created.description, "No description");
    assert_eq!(created.code, "000000");
    assert_eq!(created.creator_id, "user_001");
    assert_eq!(created.status, WorkshopStatus::Draft);
    assert_eq!(created.member_count, 1);
    assert!(created.id.starts_with("ws_"));
    assert_ne!(created.id, "ws_001");
    assert!(created.created_at >= before);
}

#[tokio::test]
async fn create_honors_supplied_fields() {
    let created = api()
        .workshop
        .create(NewWorkshop {
            title: Some("周五晚上修个灯泡".to_string()),
            description: Some("修不好也没关系".to_string()),
            code: Some("424242".to_string()),
            creator_id: Some("admin_002".to_string()),
            status: Some(WorkshopStatus::Active),
        })
        .await
        .unwrap();

    assert_eq!(created.title, "周五晚上修个灯泡");
    assert_eq!(created.description, "修不好也没关系");
    assert_eq!(created.code, "424242");
    assert_eq!(created.creator_id, "admin_002");
    assert_eq!(created.status, WorkshopStatus::Active);
    assert_eq!(created.member_count, 1);
}

#[tokio::test]
async fn create_does_not_change_the_listed_collection() {
    let api = api();
    let created = api.workshop.create(NewWorkshop::default()).await.unwrap();

    let workshops = api.workshop.list().await.unwrap();
    assert_eq!(workshops.len(), 3);
    assert!(workshops.iter().all(|w| w.id != created.id));
}

#[tokio::test]
async fn created_ids_are_unique() {
    let api = api();
    let a = api.workshop.create(NewWorkshop::default()).await.unwrap();
    let b = api.workshop.create(NewWorkshop::default()).await.unwrap();
    assert_ne!(a.id, b.id);
}
