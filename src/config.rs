use crate::error::{ApiError, ApiResult};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_base_delay_ms")]
    pub mock_base_delay_ms: u64,
    #[serde(default = "default_jitter_ms")]
    pub mock_jitter_ms: u64,
    #[serde(default = "default_current_user_delay_ms")]
    pub mock_current_user_delay_ms: u64,

    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

// 为了向后兼容，创建嵌套结构的访问器
#[derive(Clone, Debug)]
pub struct LatencyConfig {
    pub base_ms: u64,
    pub jitter_ms: u64,
    pub current_user_base_ms: u64,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

// Default value functions
fn default_base_delay_ms() -> u64 {
    500
}
fn default_jitter_ms() -> u64 {
    500
}
fn default_current_user_delay_ms() -> u64 {
    200
} // the "who am I" call is cheap even on a slow backend
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Config {
    pub fn from_env() -> ApiResult<Self> {
        dotenvy::dotenv().ok();

        let config = envy::from_env::<Config>()
            .map_err(|e| ApiError::Config(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ApiResult<()> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ApiError::Config(format!(
                    "LOG_LEVEL must be one of trace/debug/info/warn/error, got '{}'",
                    other
                )));
            }
        }

        // jitter 0 is allowed so tests can run with a deterministic delay
        if self.mock_current_user_delay_ms > self.mock_base_delay_ms {
            return Err(ApiError::Config(
                "MOCK_CURRENT_USER_DELAY_MS cannot be greater than MOCK_BASE_DELAY_MS".to_string(),
            ));
        }

        Ok(())
    }

    // 提供嵌套结构的访问器
    pub fn latency(&self) -> LatencyConfig {
        LatencyConfig {
            base_ms: self.mock_base_delay_ms,
            jitter_ms: self.mock_jitter_ms,
            current_user_base_ms: self.mock_current_user_delay_ms,
        }
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mock_base_delay_ms: default_base_delay_ms(),
            mock_jitter_ms: default_jitter_ms(),
            mock_current_user_delay_ms: default_current_user_delay_ms(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}
