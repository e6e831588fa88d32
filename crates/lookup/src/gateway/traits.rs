//! Lookup gateway trait definition.

use async_trait::async_trait;

use crate::errors::GatewayError;
use crate::models::{CompoundId, CompoundProperties};

/// Read-only access to an external chemical database.
///
/// Implementations own the transport (HTTP client, timeouts, credentials)
/// and decode responses into typed values. An answered request with a
/// non-success status must be reported as [`GatewayError::Status`] so the
/// resolver can fall back; I/O failures use the other variants.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use chemtrack_lookup::gateway::LookupGateway;
///
/// struct FixedGateway;
///
/// #[async_trait]
/// impl LookupGateway for FixedGateway {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn find_identifiers_by_name(&self, _name: &str) -> Result<Vec<CompoundId>, GatewayError> {
///         Ok(vec![CompoundId::new(962)])
///     }
///
///     // ... remaining operations
/// }
/// ```
#[async_trait]
pub trait LookupGateway: Send + Sync {
    /// Short constant name used in logs, e.g. "PUBCHEM".
    fn id(&self) -> &'static str;

    /// Exact name (or formula) to identifier search.
    async fn find_identifiers_by_name(&self, name: &str)
        -> Result<Vec<CompoundId>, GatewayError>;

    /// Autocomplete suggestions for a partial or misspelled name.
    async fn find_suggestions(&self, partial_name: &str) -> Result<Vec<String>, GatewayError>;

    /// Formula, display name and synonyms for one compound.
    async fn fetch_properties(&self, id: CompoundId) -> Result<CompoundProperties, GatewayError>;

    /// URL of a 2D structure image. Built locally, no request is made.
    fn structure_image_url(&self, id: CompoundId) -> String;
}
