use std::env;

use dotenvy::dotenv;

/// App configuration, resolved once at startup by the shell and handed to
/// the collaborators that need it (API client, logging).
#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// How long cached offline credentials stay accepted for offline
    /// login.
    pub offline_login_ttl_secs: u64,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            api_base_url: env::var("API_BASE_URL").expect("API_BASE_URL must be set"),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap(),
            offline_login_ttl_secs: env::var("OFFLINE_LOGIN_TTL_SECS")
                .unwrap_or_else(|_| "86400".to_string()) // default 24h
                .parse()
                .unwrap(),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
        }
    }
}
