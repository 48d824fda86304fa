use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Server settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    /// JSON array of meetings to start the in-memory store with.
    pub seed_path: Option<PathBuf>,
    /// Artificial latency for every provider call.
    pub lookup_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND.to_string(),
            seed_path: None,
            lookup_delay: Duration::ZERO,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Ignoring unreadable .env file: {e}");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or invalid values fall back to defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(bind) = get("MEETBOOK_BIND").filter(|v| !v.trim().is_empty()) {
            config.bind_addr = bind.trim().to_string();
        }

        config.seed_path = get("MEETBOOK_SEED")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        if let Some(raw) = get("MEETBOOK_LOOKUP_DELAY_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.lookup_delay = Duration::from_millis(ms),
                Err(_) => log::warn!("MEETBOOK_LOOKUP_DELAY_MS={raw:?} is not a number, using 0"),
            }
        }

        config
    }
}
