use workshop_mock::MockApi;
use workshop_mock::latency::Latency;
use workshop_mock::models::NodeStatus;
use workshop_mock::services::WorkshopApi;

fn api() -> MockApi {
    MockApi::with_latency(Latency::zero())
}

#[tokio::test]
async fn roadmap_returns_the_five_demo_nodes() {
    let nodes = api().workshop.roadmap("ws_001").await.unwrap();

    let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["node_1", "node_2", "node_3", "node_4", "node_5"]);
    assert!(nodes.iter().all(|n| n.workshop_id == "ws_001"));

    let orders: Vec<i32> = nodes.iter().map(|n| n.order).collect();
    assert_eq!(orders, [1, 2, 3, 4, 5]);
}

// The seed only carries nodes for ws_001 and the service answers every
// request from it; asking for another workshop yields the same demo data.
#[tokio::test]
async fn roadmap_serves_demo_data_regardless_of_requested_id() {
    let api = api();
    let demo = api.workshop.roadmap("ws_001").await.unwrap();
    let other = api.workshop.roadmap("ws_002").await.unwrap();
    assert_eq!(demo, other);
}

#[tokio::test]
async fn node_statuses_follow_the_unlock_sequence() {
    let nodes = api().workshop.roadmap("ws_001").await.unwrap();

    // Progression is monotonic along the order: no node is further along
    // than the one before it.
    for pair in nodes.windows(2) {
        assert!(pair[1].status <= pair[0].status);
    }
    assert_eq!(nodes[0].status, NodeStatus::Completed);
    assert_eq!(nodes[4].status, NodeStatus::Locked);
}

#[test]
fn node_status_ordering_matches_progression() {
    assert!(NodeStatus::Locked < NodeStatus::Pending);
    assert!(NodeStatus::Pending < NodeStatus::InProgress);
    assert!(NodeStatus::InProgress < NodeStatus::Completed);
}
