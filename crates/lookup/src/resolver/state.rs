//! Lookup state machine.
//!
//! Every transition is a pure function of the current state's data and the
//! gateway outcome for that step, so the fallback policy can be exercised
//! without any gateway at all.

use crate::errors::{GatewayError, LookupError};
use crate::models::{CompoundCandidate, CompoundId, CompoundProperties, ResolvedCompound};

/// Rejection message for a blank query.
pub const EMPTY_QUERY: &str = "Please enter a chemical name or formula";
/// The suggestion endpoint answered unsuccessfully.
pub const SEARCH_FAILED: &str = "PubChem search failed";
/// The suggestion endpoint returned no terms.
pub const NO_SUGGESTIONS: &str = "No suggestions found for this chemical";
/// None of the tried suggestions had an identifier.
pub const NO_MATCHES: &str = "No matches found in PubChem";
/// The property endpoint answered unsuccessfully.
pub const FETCH_FAILED: &str = "Failed to fetch compound properties";

/// Number of suggestions tried before giving up.
pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum LookupState {
    /// Look the raw query up by name.
    DirectSearch,
    /// Direct search missed; ask for suggestions.
    NeedsSuggestions,
    /// Look `suggestions[index]` up by name.
    TrySuggestion {
        suggestions: Vec<String>,
        index: usize,
    },
    /// A candidate was found; fetch its properties.
    PropertyFetch(CompoundCandidate),
    Resolved(ResolvedCompound),
    Failed(LookupError),
}

impl LookupState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DirectSearch => "DirectSearch",
            Self::NeedsSuggestions => "NeedsSuggestions",
            Self::TrySuggestion { .. } => "TrySuggestion",
            Self::PropertyFetch(_) => "PropertyFetch",
            Self::Resolved(_) => "Resolved",
            Self::Failed(_) => "Failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved(_) | Self::Failed(_))
    }

    /// Direct hit goes straight to the property fetch; an empty result or an
    /// unsuccessful status falls back to suggestions.
    pub fn after_direct_search(
        query: &str,
        outcome: Result<Vec<CompoundId>, GatewayError>,
    ) -> Self {
        match outcome {
            Ok(ids) => match ids.first() {
                Some(id) => Self::PropertyFetch(CompoundCandidate::new(*id, query)),
                None => Self::NeedsSuggestions,
            },
            Err(GatewayError::Status { .. }) => Self::NeedsSuggestions,
            Err(e) => Self::Failed(e.into()),
        }
    }

    pub fn after_suggestions(outcome: Result<Vec<String>, GatewayError>) -> Self {
        match outcome {
            Ok(mut suggestions) => {
                if suggestions.is_empty() {
                    return Self::Failed(LookupError::LookupFailed(NO_SUGGESTIONS.to_string()));
                }
                suggestions.truncate(MAX_SUGGESTIONS);
                Self::TrySuggestion {
                    suggestions,
                    index: 0,
                }
            }
            Err(GatewayError::Status { .. }) => {
                Self::Failed(LookupError::LookupFailed(SEARCH_FAILED.to_string()))
            }
            Err(e) => Self::Failed(e.into()),
        }
    }

    /// First suggestion with an identifier wins; a miss moves to the next one.
    pub fn after_suggestion_lookup(
        suggestions: Vec<String>,
        index: usize,
        outcome: Result<Vec<CompoundId>, GatewayError>,
    ) -> Self {
        let hit = match outcome {
            Ok(ids) => ids.first().copied(),
            Err(GatewayError::Status { .. }) => None,
            Err(e) => return Self::Failed(e.into()),
        };

        match (hit, suggestions.get(index)) {
            (Some(id), Some(matched)) => {
                Self::PropertyFetch(CompoundCandidate::new(id, matched.clone()))
            }
            _ if index + 1 < suggestions.len() => Self::TrySuggestion {
                suggestions,
                index: index + 1,
            },
            _ => Self::Failed(LookupError::LookupFailed(NO_MATCHES.to_string())),
        }
    }

    pub fn after_property_fetch(
        candidate: CompoundCandidate,
        structure_image_url: String,
        outcome: Result<CompoundProperties, GatewayError>,
    ) -> Self {
        match outcome {
            Ok(properties) => Self::Resolved(ResolvedCompound::from_properties(
                candidate,
                properties,
                structure_image_url,
            )),
            Err(GatewayError::Status { .. }) => {
                Self::Failed(LookupError::LookupFailed(FETCH_FAILED.to_string()))
            }
            Err(e) => Self::Failed(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<CompoundId> {
        raw.iter().copied().map(CompoundId::new).collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn lookup_failed(reason: &str) -> LookupState {
        LookupState::Failed(LookupError::LookupFailed(reason.to_string()))
    }

    #[test]
    fn test_direct_hit_uses_first_id_and_query() {
        let state = LookupState::after_direct_search("water", Ok(ids(&[962, 1])));
        assert_eq!(
            state,
            LookupState::PropertyFetch(CompoundCandidate::new(CompoundId::new(962), "water"))
        );
    }

    #[test]
    fn test_direct_miss_needs_suggestions() {
        assert_eq!(
            LookupState::after_direct_search("watr", Ok(Vec::new())),
            LookupState::NeedsSuggestions
        );
        assert_eq!(
            LookupState::after_direct_search("watr", Err(GatewayError::Status { status: 404 })),
            LookupState::NeedsSuggestions
        );
    }

    #[test]
    fn test_direct_transport_error_fails() {
        let state = LookupState::after_direct_search(
            "water",
            Err(GatewayError::Transport("refused".to_string())),
        );
        assert_eq!(
            state,
            LookupState::Failed(LookupError::Transport("refused".to_string()))
        );
    }

    #[test]
    fn test_suggestions_status_failure() {
        let state = LookupState::after_suggestions(Err(GatewayError::Status { status: 500 }));
        assert_eq!(state, lookup_failed(SEARCH_FAILED));
    }

    #[test]
    fn test_no_suggestions() {
        let state = LookupState::after_suggestions(Ok(Vec::new()));
        assert_eq!(state, lookup_failed(NO_SUGGESTIONS));
    }

    #[test]
    fn test_suggestions_truncated_to_five_in_order() {
        let state =
            LookupState::after_suggestions(Ok(strings(&["a", "b", "c", "d", "e", "f", "g"])));
        assert_eq!(
            state,
            LookupState::TrySuggestion {
                suggestions: strings(&["a", "b", "c", "d", "e"]),
                index: 0,
            }
        );
    }

    #[test]
    fn test_suggestion_hit_uses_suggestion_text() {
        let state = LookupState::after_suggestion_lookup(
            strings(&["ethanol", "ethanal"]),
            1,
            Ok(ids(&[177])),
        );
        assert_eq!(
            state,
            LookupState::PropertyFetch(CompoundCandidate::new(CompoundId::new(177), "ethanal"))
        );
    }

    #[test]
    fn test_suggestion_miss_advances() {
        let suggestions = strings(&["a", "b"]);
        let state = LookupState::after_suggestion_lookup(suggestions.clone(), 0, Ok(Vec::new()));
        assert_eq!(
            state,
            LookupState::TrySuggestion {
                suggestions: suggestions.clone(),
                index: 1,
            }
        );

        let state = LookupState::after_suggestion_lookup(
            suggestions.clone(),
            0,
            Err(GatewayError::Status { status: 404 }),
        );
        assert_eq!(state, LookupState::TrySuggestion { suggestions, index: 1 });
    }

    #[test]
    fn test_last_suggestion_miss_fails() {
        let state = LookupState::after_suggestion_lookup(strings(&["a", "b"]), 1, Ok(Vec::new()));
        assert_eq!(state, lookup_failed(NO_MATCHES));
    }

    #[test]
    fn test_suggestion_decode_error_fails_immediately() {
        let state = LookupState::after_suggestion_lookup(
            strings(&["a", "b"]),
            0,
            Err(GatewayError::Decode("bad json".to_string())),
        );
        assert_eq!(
            state,
            LookupState::Failed(LookupError::Transport("bad json".to_string()))
        );
    }

    #[test]
    fn test_property_fetch_status_failure() {
        let state = LookupState::after_property_fetch(
            CompoundCandidate::new(CompoundId::new(962), "water"),
            "img".to_string(),
            Err(GatewayError::Status { status: 503 }),
        );
        assert_eq!(state, lookup_failed(FETCH_FAILED));
    }

    #[test]
    fn test_property_fetch_resolves() {
        let state = LookupState::after_property_fetch(
            CompoundCandidate::new(CompoundId::new(962), "water"),
            "img".to_string(),
            Ok(CompoundProperties {
                formula: Some("H2O".to_string()),
                display_name: None,
                synonyms: None,
            }),
        );

        match state {
            LookupState::Resolved(compound) => {
                assert_eq!(compound.name, "water");
                assert_eq!(compound.formula, "H2O");
                assert_eq!(compound.structure_image_url.as_deref(), Some("img"));
            }
            other => panic!("Expected Resolved, got {}", other.name()),
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(!LookupState::DirectSearch.is_terminal());
        assert!(!LookupState::NeedsSuggestions.is_terminal());
        assert!(lookup_failed(NO_MATCHES).is_terminal());
    }
}
