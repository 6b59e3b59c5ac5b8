pub mod config;
pub mod error;
pub mod latency;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;
pub mod validation;

use std::time::Duration;

use crate::config::Config;
use crate::latency::Latency;
use crate::services::{AuthService, WorkshopService};

/// The whole mock surface, grouped by domain area the way the views consume
/// it: `api.auth` and `api.workshop`.
pub struct MockApi {
    pub auth: AuthService,
    pub workshop: WorkshopService,
}

impl MockApi {
    pub fn new(config: &Config) -> Self {
        let latency_config = config.latency();
        let latency = Latency::from_config(&latency_config);
        Self {
            auth: AuthService::new(
                latency.clone(),
                Duration::from_millis(latency_config.current_user_base_ms),
            ),
            workshop: WorkshopService::new(latency),
        }
    }

    /// Builds the surface on an explicit delay source; tests pass
    /// [`Latency::zero`] to skip the simulated latency entirely.
    pub fn with_latency(latency: Latency) -> Self {
        Self {
            auth: AuthService::new(latency.clone(), latency.base()),
            workshop: WorkshopService::new(latency),
        }
    }
}

pub fn init_tracing(config: &Config) {
    let level_filter = match config.log_level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    };

    unsafe {
        std::env::set_var("RUST_LOG", level_filter);
    }

    match config.log_format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .init();
        },
        _ => {
            tracing_subscriber::fmt()
                .init();
        }
    }
}
