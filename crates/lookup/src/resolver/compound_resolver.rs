//! Compound resolver - drives the lookup state machine against a gateway.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::errors::LookupError;
use crate::gateway::LookupGateway;
use crate::models::{CompoundQuery, ResolvedCompound};

use super::state::{LookupState, EMPTY_QUERY};

/// Resolves free text (a name or a formula) into a [`ResolvedCompound`].
///
/// Resolution order:
/// 1. Direct name search with the query text
/// 2. Autocomplete suggestions, each looked up by name in order (at most 5)
/// 3. Property fetch for the first identifier found
///
/// The resolver holds no mutable state, so one instance can serve any
/// number of concurrent lookups. Gateway calls within a lookup are strictly
/// sequential.
///
/// # Example
///
/// ```ignore
/// let gateway = Arc::new(PubChemGateway::new(GatewayConfig::default()));
/// let resolver = CompoundResolver::new(gateway);
///
/// let compound = resolver.resolve(&CompoundQuery::new("ethanol")).await?;
/// // compound.formula = "C2H6O"
/// ```
#[derive(Clone)]
pub struct CompoundResolver {
    gateway: Arc<dyn LookupGateway>,
}

impl CompoundResolver {
    pub fn new(gateway: Arc<dyn LookupGateway>) -> Self {
        Self { gateway }
    }

    /// Id of the gateway in use.
    pub fn gateway_id(&self) -> &'static str {
        self.gateway.id()
    }

    /// Resolve a query.
    ///
    /// # Returns
    /// * `Ok(compound)` - a compound was found and its properties fetched
    /// * `Err(LookupError::InvalidQuery)` - blank query, no request was made
    /// * `Err(LookupError::LookupFailed)` - nothing matched, or the property fetch was refused
    /// * `Err(LookupError::Transport)` - the gateway could not be reached or answered garbage
    pub async fn resolve(&self, query: &CompoundQuery) -> Result<ResolvedCompound, LookupError> {
        if query.is_blank() {
            return Err(LookupError::InvalidQuery(EMPTY_QUERY.to_string()));
        }

        let text = query.raw_text();
        let mut state = LookupState::DirectSearch;

        while !state.is_terminal() {
            let from = state.name();
            state = self.step(text, state).await;
            debug!(
                "{} lookup '{}': {} -> {}",
                self.gateway.id(),
                text,
                from,
                state.name()
            );
        }

        match state {
            LookupState::Resolved(compound) => {
                info!(
                    "Resolved '{}' to '{}' ({})",
                    text, compound.name, compound.formula
                );
                Ok(compound)
            }
            LookupState::Failed(error) => {
                warn!("Lookup for '{}' failed: {}", text, error);
                Err(error)
            }
            // Loop exits only on a terminal state
            other => Err(LookupError::Transport(format!(
                "Lookup stopped in state {}",
                other.name()
            ))),
        }
    }

    /// Perform the gateway call for a non-terminal state and transition.
    async fn step(&self, text: &str, state: LookupState) -> LookupState {
        match state {
            LookupState::DirectSearch => {
                let outcome = self.gateway.find_identifiers_by_name(text).await;
                LookupState::after_direct_search(text, outcome)
            }
            LookupState::NeedsSuggestions => {
                let outcome = self.gateway.find_suggestions(text).await;
                LookupState::after_suggestions(outcome)
            }
            LookupState::TrySuggestion { suggestions, index } => {
                let outcome = match suggestions.get(index) {
                    Some(suggestion) => self.gateway.find_identifiers_by_name(suggestion).await,
                    None => Ok(Vec::new()),
                };
                LookupState::after_suggestion_lookup(suggestions, index, outcome)
            }
            LookupState::PropertyFetch(candidate) => {
                let image_url = self.gateway.structure_image_url(candidate.id);
                let outcome = self.gateway.fetch_properties(candidate.id).await;
                LookupState::after_property_fetch(candidate, image_url, outcome)
            }
            terminal => terminal,
        }
    }
}
