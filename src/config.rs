use dotenv::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PACING_STEP_MS: u64 = 800;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub predictor_base_url: String,
    /// `None` waits on the prediction server indefinitely.
    pub request_timeout: Option<Duration>,
    pub pacing_step: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            predictor_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            pacing_step: Duration::from_millis(DEFAULT_PACING_STEP_MS),
        }
    }
}

impl DashboardConfig {
    /// Reads `PREDICTOR_BASE_URL`, `PREDICTOR_TIMEOUT_SECS` and `PACING_STEP_MS`,
    /// loading a `.env` file first when present.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = DashboardConfig::default();

        let predictor_base_url = lookup("PREDICTOR_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.predictor_base_url);

        let request_timeout = match parse_var::<u64>(&lookup, "PREDICTOR_TIMEOUT_SECS") {
            Some(0) | None => None,
            Some(secs) => Some(Duration::from_secs(secs)),
        };

        let pacing_step = parse_var::<u64>(&lookup, "PACING_STEP_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.pacing_step);

        DashboardConfig {
            predictor_base_url,
            request_timeout,
            pacing_step,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(val) => Some(val),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable setting, using default");
            None
        }
    }
}
