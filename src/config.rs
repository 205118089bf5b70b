use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Value of `STORE_PATH` that selects the in-memory key-value store.
pub const MEMORY_STORE: &str = ":memory:";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub store_path: String,
    pub attendance_key: String,
    pub api_prefix: String,
    pub log_dir: PathBuf,

    // Rate limiting
    pub rate_per_min: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let rate_per_min = var("RATE_PER_MIN", "1000");

        Ok(Self {
            server_addr: var("SERVER_ADDR", "127.0.0.1:8080"),
            store_path: var("STORE_PATH", "data/local_storage.json"),
            attendance_key: var("ATTENDANCE_KEY", "hrms_attendance"),
            api_prefix: var("API_PREFIX", "/api"),
            log_dir: PathBuf::from(var("LOG_DIR", "logs")),
            rate_per_min: rate_per_min
                .parse()
                .with_context(|| format!("RATE_PER_MIN must be a number, got {rate_per_min:?}"))?,
        })
    }

    pub fn uses_memory_store(&self) -> bool {
        self.store_path == MEMORY_STORE
    }
}
