use std::time::Duration;

use tokio::time::Instant;
use workshop_mock::MockApi;
use workshop_mock::config::Config;
use workshop_mock::latency::Latency;
use workshop_mock::services::{AuthApi, WorkshopApi};

// start_paused makes tokio auto-advance the clock to each sleep deadline, so
// these bounds hold deterministically without real waiting.

#[tokio::test(start_paused = true)]
async fn wait_stays_within_base_and_jitter_bounds() {
    let latency = Latency::new(Duration::from_millis(500), Duration::from_millis(500));

    let start = Instant::now();
    latency.wait().await;
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(500));
    assert!(elapsed < Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn current_user_uses_the_shorter_base_delay() {
    let api = MockApi::new(&Config::default());

    let start = Instant::now();
    api.auth.current_user().await.unwrap();
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(200));
    assert!(elapsed < Duration::from_millis(700));
}

#[tokio::test(start_paused = true)]
async fn login_uses_the_default_base_delay() {
    let api = MockApi::new(&Config::default());

    let start = Instant::now();
    api.auth.login("frank@juanleme.com").await.unwrap();
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(500));
    assert!(elapsed < Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn zero_latency_resolves_immediately() {
    let api = MockApi::with_latency(Latency::zero());

    let start = Instant::now();
    api.workshop.list().await.unwrap();
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn failures_also_wait_out_the_simulated_delay() {
    let api = MockApi::new(&Config::default());

    let start = Instant::now();
    api.workshop.join("12345").await.unwrap_err();
    assert!(start.elapsed() >= Duration::from_millis(500));
}
