use std::time::Duration;

use async_trait::async_trait;

use crate::{
    error::{ApiError, ApiResult},
    latency::Latency,
    models::{UserProfile, UserProfileUpdate},
    seed,
    services::AuthApi,
};

/// The only email that fails a login. The mock does not model accounts, so
/// this sentinel is the whole credential check.
const BAD_EMAIL_SENTINEL: &str = "error@test.com";

pub struct AuthService {
    latency: Latency,
    current_user_latency: Latency,
}

impl AuthService {
    pub fn new(latency: Latency, current_user_base: Duration) -> Self {
        let current_user_latency = latency.with_base(current_user_base);
        Self {
            latency,
            current_user_latency,
        }
    }
}

#[async_trait]
impl AuthApi for AuthService {
    /// Any email logs in as the seed user, except the sentinel.
    async fn login(&self, email: &str) -> ApiResult<UserProfile> {
        self.latency.wait().await;

        if email == BAD_EMAIL_SENTINEL {
            tracing::info!(email, "login rejected");
            return Err(ApiError::invalid_credentials("Invalid credentials"));
        }

        tracing::debug!(email, "login as seed user");
        Ok(seed::user())
    }

    async fn current_user(&self) -> ApiResult<UserProfile> {
        self.current_user_latency.wait().await;
        Ok(seed::user())
    }

    /// Overlays the given fields onto the seed profile and returns the new
    /// value. The seed is rebuilt fresh on every read, so the change does not
    /// survive to the next call — deliberate until real persistence exists.
    async fn update_profile(&self, update: UserProfileUpdate) -> ApiResult<UserProfile> {
        self.latency.wait().await;
        Ok(seed::user().merge(&update))
    }
}
