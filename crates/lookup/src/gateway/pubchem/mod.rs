//! PubChem gateway implementation.
//!
//! This module talks to the PubChem PUG REST service:
//! - Name to CID search via `/compound/name/{name}/cids/JSON`
//! - Autocomplete suggestions via `/autocomplete/compound/{text}/json`
//! - Properties via `/compound/cid/{cid}/property/...` and `/compound/cid/{cid}/synonyms/JSON`
//! - Structure images via `/compound/cid/{cid}/PNG` (URL only)
//!
//! API documentation: https://pubchem.ncbi.nlm.nih.gov/docs/pug-rest

mod models;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::GatewayError;
use crate::gateway::{GatewayConfig, LookupGateway};
use crate::models::{CompoundId, CompoundProperties};

use models::{
    to_properties, AutocompleteResponse, CidsResponse, PropertyResponse, SynonymsResponse,
};

const GATEWAY_ID: &str = "PUBCHEM";

const PROPERTY_LIST: &str = "MolecularFormula,IUPACName,Title";

/// PubChem lookup gateway.
///
/// # Example
///
/// ```ignore
/// use chemtrack_lookup::gateway::{pubchem::PubChemGateway, GatewayConfig};
///
/// let gateway = PubChemGateway::new(GatewayConfig::default());
/// ```
pub struct PubChemGateway {
    client: Client,
    config: GatewayConfig,
}

impl PubChemGateway {
    /// Create a gateway with the given transport settings.
    pub fn new(config: GatewayConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    fn pug_url(&self, path: &str) -> String {
        format!("{}{}", self.config.pug_url.trim_end_matches('/'), path)
    }

    /// GET a URL and decode the JSON body.
    ///
    /// Non-success statuses come back as `GatewayError::Status`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GatewayError> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        debug!("PubChem request: {}", url);

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Transport(format!("Request timed out: {}", e))
            } else {
                GatewayError::Transport(format!("Request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("PubChem returned HTTP {} for {}", status, url);
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

#[async_trait]
impl LookupGateway for PubChemGateway {
    fn id(&self) -> &'static str {
        GATEWAY_ID
    }

    async fn find_identifiers_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<CompoundId>, GatewayError> {
        let url = self.pug_url(&format!(
            "/compound/name/{}/cids/JSON",
            urlencoding::encode(name)
        ));
        let response: CidsResponse = self.get_json(&url).await?;
        Ok(response.into_ids())
    }

    async fn find_suggestions(&self, partial_name: &str) -> Result<Vec<String>, GatewayError> {
        let url = format!(
            "{}/compound/{}/json?limit={}",
            self.config.autocomplete_url.trim_end_matches('/'),
            urlencoding::encode(partial_name),
            self.config.suggestion_limit
        );
        let response: AutocompleteResponse = self.get_json(&url).await?;
        Ok(response.into_terms())
    }

    async fn fetch_properties(&self, id: CompoundId) -> Result<CompoundProperties, GatewayError> {
        let property_url =
            self.pug_url(&format!("/compound/cid/{}/property/{}/JSON", id, PROPERTY_LIST));
        let response: PropertyResponse = self.get_json(&property_url).await?;
        let row = response.property_table.properties.into_iter().next();

        // Missing synonyms are not a failure of the property fetch
        let synonyms_url = self.pug_url(&format!("/compound/cid/{}/synonyms/JSON", id));
        let synonyms = match self.get_json::<SynonymsResponse>(&synonyms_url).await {
            Ok(response) => response.into_synonyms(),
            Err(GatewayError::Status { status }) => {
                debug!("No synonyms for CID {} (HTTP {})", id, status);
                None
            }
            Err(e) => return Err(e),
        };

        Ok(to_properties(row, synonyms))
    }

    fn structure_image_url(&self, id: CompoundId) -> String {
        self.pug_url(&format!("/compound/cid/{}/PNG", id))
    }
}
