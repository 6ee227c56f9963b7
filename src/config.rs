use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration. Environment variables override the code
/// defaults; there are no config files.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_base_url: String,
    /// Bound on every outbound generation call. Exceeding it is a service
    /// failure, mapped to the caller's fallback path.
    pub request_timeout: Duration,
    pub profile_log: PathBuf,
    pub retrieval_top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_base_url: "http://localhost:8080".to_string(),
            request_timeout: Duration::from_secs(20),
            profile_log: PathBuf::from("insurance_responses.jsonl"),
            retrieval_top_k: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            llm_base_url: env::var("AEGIS_LLM_URL").unwrap_or(defaults.llm_base_url),
            request_timeout: env::var("AEGIS_LLM_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_timeout),
            profile_log: env::var("AEGIS_PROFILE_LOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.profile_log),
            retrieval_top_k: env::var("AEGIS_RETRIEVAL_TOP_K")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retrieval_top_k),
        }
    }
}
