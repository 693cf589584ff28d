use crate::error::AppError;

const DEFAULT_MAX_RESULTS: usize = 50;
const DEFAULT_LIMIT: usize = 10;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// When set, serve MCP over TCP on this address instead of stdio.
    pub listen_addr: Option<String>,
    /// Upper bound for the `limit` parameter of `search_faq`.
    pub max_results: usize,
    /// `limit` used when the caller gives none. Never above `max_results`.
    pub default_limit: usize,
}

impl Config {
    /// Optional:
    /// - `MCP_TCP_LISTEN_ADDR`: e.g. "127.0.0.1:7400"
    /// - `FAQ_MAX_RESULTS` (default: 50)
    /// - `FAQ_DEFAULT_LIMIT` (default: 10)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let listen_addr = lookup("MCP_TCP_LISTEN_ADDR").filter(|s| !s.trim().is_empty());
        let max_results = positive(&lookup, "FAQ_MAX_RESULTS")?.unwrap_or(DEFAULT_MAX_RESULTS);
        let default_limit = positive(&lookup, "FAQ_DEFAULT_LIMIT")?
            .unwrap_or(DEFAULT_LIMIT)
            .min(max_results);

        Ok(Self {
            listen_addr,
            max_results,
            default_limit,
        })
    }

    /// Resolves a caller-supplied limit against the configured bounds. Zero
    /// counts as unset.
    pub fn effective_limit(&self, requested: Option<u32>) -> usize {
        requested
            .filter(|&n| n > 0)
            .map(|n| n as usize)
            .unwrap_or(self.default_limit)
            .min(self.max_results)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: None,
            max_results: DEFAULT_MAX_RESULTS,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<usize>, AppError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(AppError::Config(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}
