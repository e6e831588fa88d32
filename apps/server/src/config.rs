use std::{net::SocketAddr, str::FromStr, time::Duration};

use chemtrack_lookup::GatewayConfig;

/// Upper bound on sequential PubChem requests behind one resolve: eight
/// gateway operations, the property fetch counting twice for its synonyms call.
const MAX_LOOKUP_REQUESTS: u32 = 9;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub gateway: GatewayConfig,
}

impl Config {
    /// Read settings from `CT_*` environment variables, after loading `.env`
    /// if one is present.
    ///
    /// Malformed values are logged and replaced by their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr = env_or("CT_LISTEN_ADDR", SocketAddr::from(([0, 0, 0, 0], 8080)));
        let cors_allow = std::env::var("CT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("CT_REQUEST_TIMEOUT_MS", 30000);

        let defaults = GatewayConfig::default();
        let lookup_timeout_ms: u64 = env_or(
            "CT_LOOKUP_TIMEOUT_MS",
            defaults.request_timeout.as_millis() as u64,
        );
        let gateway = GatewayConfig {
            pug_url: std::env::var("CT_PUBCHEM_PUG_URL").unwrap_or(defaults.pug_url),
            autocomplete_url: std::env::var("CT_PUBCHEM_AUTOCOMPLETE_URL")
                .unwrap_or(defaults.autocomplete_url),
            request_timeout: Duration::from_millis(lookup_timeout_ms),
            suggestion_limit: defaults.suggestion_limit,
            api_token: std::env::var("CT_LOOKUP_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
        };

        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            gateway,
        }
    }
}

impl Config {
    /// Timeout applied to each HTTP request served.
    ///
    /// Never shorter than a worst-case lookup, so a slow upstream is reported
    /// as a 502 from the gateway rather than cut off by the server.
    pub fn effective_request_timeout(&self) -> Duration {
        let worst_lookup = self.gateway.request_timeout * MAX_LOOKUP_REQUESTS;
        self.request_timeout.max(worst_lookup + Duration::from_secs(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            gateway: GatewayConfig::default(),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}
