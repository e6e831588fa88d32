//! Transport configuration for gateway implementations.

use std::time::Duration;

/// PubChem PUG REST root.
pub const DEFAULT_PUG_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";

/// PubChem autocomplete root.
pub const DEFAULT_AUTOCOMPLETE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/autocomplete";

/// Default HTTP request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of suggestions requested from the autocomplete endpoint.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Settings passed explicitly to a gateway at construction.
///
/// `api_token` is forwarded as a bearer token when set, which is how a
/// deployment behind an authenticating proxy supplies its credential.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub pug_url: String,
    pub autocomplete_url: String,
    pub request_timeout: Duration,
    pub suggestion_limit: usize,
    pub api_token: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            pug_url: DEFAULT_PUG_URL.to_string(),
            autocomplete_url: DEFAULT_AUTOCOMPLETE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            api_token: None,
        }
    }
}

impl GatewayConfig {
    /// Set the credential forwarded with every request.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
