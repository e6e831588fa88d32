//! Compound lookup inputs and outputs.

use serde::{Deserialize, Serialize};

use super::types::CompoundId;

/// Maximum number of synonyms kept on a resolved compound.
pub const MAX_SYNONYMS: usize = 10;

/// Free-text lookup input: a common name or a formula.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundQuery {
    raw_text: String,
}

impl CompoundQuery {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// True when the query carries nothing to search for.
    pub fn is_blank(&self) -> bool {
        self.raw_text.trim().is_empty()
    }
}

/// A tentative match found during the search stages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CompoundCandidate {
    pub id: CompoundId,
    /// The text that produced the match (the query or a suggestion).
    pub matched_name: String,
}

impl CompoundCandidate {
    pub fn new(id: CompoundId, matched_name: impl Into<String>) -> Self {
        Self {
            id,
            matched_name: matched_name.into(),
        }
    }
}

/// Properties returned by a gateway for one compound.
///
/// `None` means the field was absent from the response; `Some("")` means it
/// was present but empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundProperties {
    pub formula: Option<String>,
    pub display_name: Option<String>,
    pub synonyms: Option<Vec<String>>,
}

/// Canonical record produced by a successful resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCompound {
    pub name: String,
    /// Empty when the gateway did not report a formula.
    pub formula: String,
    /// At most [`MAX_SYNONYMS`] entries, in source order.
    pub synonyms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure_image_url: Option<String>,
}

impl ResolvedCompound {
    pub(crate) fn from_properties(
        candidate: CompoundCandidate,
        properties: CompoundProperties,
        structure_image_url: String,
    ) -> Self {
        let name = properties
            .display_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(candidate.matched_name);

        let synonyms = properties
            .synonyms
            .map(|mut synonyms| {
                synonyms.truncate(MAX_SYNONYMS);
                synonyms
            })
            .unwrap_or_default();

        Self {
            name,
            formula: properties.formula.unwrap_or_default(),
            synonyms,
            structure_image_url: Some(structure_image_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> CompoundCandidate {
        CompoundCandidate::new(CompoundId::new(962), "water")
    }

    #[test]
    fn test_blank_query() {
        assert!(CompoundQuery::new("").is_blank());
        assert!(CompoundQuery::new("  \t").is_blank());
        assert!(!CompoundQuery::new("H2O").is_blank());
    }

    #[test]
    fn test_display_name_preferred_over_matched_name() {
        let properties = CompoundProperties {
            formula: Some("H2O".to_string()),
            display_name: Some("Water".to_string()),
            synonyms: None,
        };

        let resolved =
            ResolvedCompound::from_properties(candidate(), properties, "img".to_string());

        assert_eq!(resolved.name, "Water");
        assert_eq!(resolved.formula, "H2O");
        assert!(resolved.synonyms.is_empty());
        assert_eq!(resolved.structure_image_url.as_deref(), Some("img"));
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let resolved = ResolvedCompound::from_properties(
            candidate(),
            CompoundProperties::default(),
            "img".to_string(),
        );

        assert_eq!(resolved.name, "water");
        assert_eq!(resolved.formula, "");
        assert!(resolved.synonyms.is_empty());
    }

    #[test]
    fn test_blank_display_name_falls_back() {
        let properties = CompoundProperties {
            display_name: Some(" ".to_string()),
            ..Default::default()
        };

        let resolved =
            ResolvedCompound::from_properties(candidate(), properties, "img".to_string());
        assert_eq!(resolved.name, "water");
    }

    #[test]
    fn test_synonyms_truncated_in_order() {
        let synonyms: Vec<String> = (0..25).map(|i| format!("syn-{}", i)).collect();
        let properties = CompoundProperties {
            synonyms: Some(synonyms.clone()),
            ..Default::default()
        };

        let resolved =
            ResolvedCompound::from_properties(candidate(), properties, "img".to_string());

        assert_eq!(resolved.synonyms.len(), MAX_SYNONYMS);
        assert_eq!(resolved.synonyms, synonyms[..MAX_SYNONYMS].to_vec());
    }

    #[test]
    fn test_serializes_camel_case() {
        let resolved = ResolvedCompound {
            name: "Water".to_string(),
            formula: "H2O".to_string(),
            synonyms: vec!["oxidane".to_string()],
            structure_image_url: Some("https://example.com/962/PNG".to_string()),
        };

        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["structureImageUrl"], "https://example.com/962/PNG");
        assert_eq!(json["synonyms"][0], "oxidane");
    }
}
