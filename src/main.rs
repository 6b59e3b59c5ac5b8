use workshop_mock::config::Config;
use workshop_mock::services::{AuthApi, WorkshopApi};
use workshop_mock::{MockApi, init_tracing, routes};

/// Smoke run of the mock surface: logs in, lists workshops, resolves a few
/// paths, and prints what a view would receive.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    init_tracing(&config);

    let api = MockApi::new(&config);

    let user = api.auth.login("frank@juanleme.com").await?;
    println!("current user: {}", serde_json::to_string_pretty(&user)?);

    let workshops = api.workshop.list().await?;
    println!("workshops: {}", serde_json::to_string_pretty(&workshops)?);

    let roadmap = api.workshop.roadmap("ws_001").await?;
    println!("roadmap: {}", serde_json::to_string_pretty(&roadmap)?);

    for path in ["/", "/dashboard", "/workshop/ws_001", "/login", "/nope"] {
        let matched = routes::resolve(path);
        println!("{} -> {:?} (params {:?})", path, matched.name, matched.params);
    }

    Ok(())
}
