//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;

use crate::domain::ReactionPolicy;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`PollGatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct PollGatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Capacity of the EventBus broadcast channel.
    pub event_bus_capacity: usize,

    /// Per-request timeout in seconds for REST handlers.
    pub request_timeout_secs: u64,

    /// Comma-separated allow-list of reaction emoji. Empty means the
    /// built-in default catalog.
    pub reaction_allow_list: Vec<String>,
}

impl PollGatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let event_bus_capacity = parse_env("EVENT_BUS_CAPACITY", 10_000);
        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30);

        let reaction_allow_list = std::env::var("REACTION_ALLOW_LIST")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            listen_addr,
            event_bus_capacity,
            request_timeout_secs,
            reaction_allow_list,
        })
    }

    /// Builds the [`ReactionPolicy`] from the configured allow-list,
    /// falling back to the default catalog when none is configured.
    #[must_use]
    pub fn reaction_policy(&self) -> ReactionPolicy {
        if self.reaction_allow_list.is_empty() {
            ReactionPolicy::default()
        } else {
            ReactionPolicy::new(&self.reaction_allow_list)
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
