use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Orchestrator
    pub dashboard_url: String,

    // Board
    pub inventory_path: Option<PathBuf>,
    pub project: String,
    pub cluster: String,

    // Build info
    pub commit_hash: String,
    pub build_time: String,
    pub version: String,

    // Logging
    pub log_level: String,
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            // Server
            host: env::var("HUKER_CONSOLE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("HUKER_CONSOLE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8002),

            // Orchestrator
            dashboard_url: env::var("HUKER_DASHBOARD_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://127.0.0.1:8001".to_string()),

            // Board
            inventory_path: env::var("HUKER_INVENTORY_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            project: env::var("HUKER_PROJECT").unwrap_or_else(|_| "default".to_string()),
            cluster: env::var("HUKER_CLUSTER").unwrap_or_else(|_| "default".to_string()),

            // Build info
            commit_hash: env::var("COMMIT_HASH").unwrap_or_else(|_| "unknown".to_string()),
            build_time: env::var("BUILD_TIME").unwrap_or_else(|_| "unknown".to_string()),
            version: env!("CARGO_PKG_VERSION").to_string(),

            // Logging
            log_level: env::var("HUKER_CONSOLE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_json: env::var("HUKER_CONSOLE_LOG_FORMAT")
                .map(|f| matches!(f.to_lowercase().as_str(), "json" | "jsonl"))
                .unwrap_or(false),
        }
    }

    /// Base URL every orchestrator endpoint hangs off
    pub fn endpoint_base(&self) -> String {
        format!("{}/api", self.dashboard_url)
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
