//! Editable chemical record used by the admin form.

use serde::{Deserialize, Serialize};

use crate::formula::to_latex;

use super::compound::ResolvedCompound;

/// Form state for creating or editing a chemical record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChemicalDraft {
    pub name: String,
    pub shelf_id: Option<i64>,
    pub formula: String,
    pub formula_latex: String,
    pub synonyms: Vec<String>,
    pub location: String,
    pub msds_url: Option<String>,
    pub structure_2d_url: Option<String>,
    pub structure_3d_url: Option<String>,
    pub bottle_number: String,
    pub is_concentrated: bool,
}

impl ChemicalDraft {
    /// Merge a lookup result into the draft.
    ///
    /// Only fields the lookup actually produced are copied; an empty name,
    /// formula or synonym list leaves the existing value alone. A merged
    /// formula also refreshes `formula_latex`.
    pub fn apply_lookup(&mut self, compound: &ResolvedCompound) {
        if !compound.name.trim().is_empty() {
            self.name = compound.name.clone();
        }

        if !compound.formula.is_empty() {
            self.formula = compound.formula.clone();
            self.formula_latex = to_latex(&compound.formula);
        }

        if !compound.synonyms.is_empty() {
            self.synonyms = compound.synonyms.clone();
        }

        if let Some(url) = &compound.structure_image_url {
            self.structure_2d_url = Some(url.clone());
        }
    }
}

/// Split a comma separated synonym field into trimmed, non-empty entries.
pub fn parse_synonyms(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`parse_synonyms`] for populating the edit field.
pub fn join_synonyms(synonyms: &[String]) -> String {
    synonyms.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup() -> ResolvedCompound {
        ResolvedCompound {
            name: "Sulfuric acid".to_string(),
            formula: "H2SO4".to_string(),
            synonyms: vec!["Oil of vitriol".to_string()],
            structure_image_url: Some("https://example.com/1118/PNG".to_string()),
        }
    }

    #[test]
    fn test_apply_lookup_fills_empty_draft() {
        let mut draft = ChemicalDraft::default();
        draft.apply_lookup(&lookup());

        assert_eq!(draft.name, "Sulfuric acid");
        assert_eq!(draft.formula, "H2SO4");
        assert_eq!(draft.formula_latex, "H_{2}SO_{4}");
        assert_eq!(draft.synonyms, vec!["Oil of vitriol".to_string()]);
        assert_eq!(
            draft.structure_2d_url.as_deref(),
            Some("https://example.com/1118/PNG")
        );
    }

    #[test]
    fn test_apply_lookup_keeps_existing_values_for_absent_fields() {
        let mut draft = ChemicalDraft {
            name: "Table salt".to_string(),
            formula: "NaCl".to_string(),
            formula_latex: "NaCl".to_string(),
            synonyms: vec!["Halite".to_string()],
            bottle_number: "B001".to_string(),
            ..Default::default()
        };

        let sparse = ResolvedCompound {
            name: String::new(),
            formula: String::new(),
            synonyms: Vec::new(),
            structure_image_url: None,
        };
        draft.apply_lookup(&sparse);

        assert_eq!(draft.name, "Table salt");
        assert_eq!(draft.formula, "NaCl");
        assert_eq!(draft.formula_latex, "NaCl");
        assert_eq!(draft.synonyms, vec!["Halite".to_string()]);
        assert_eq!(draft.bottle_number, "B001");
        assert!(draft.structure_2d_url.is_none());
    }

    #[test]
    fn test_parse_synonyms() {
        assert_eq!(
            parse_synonyms(" Ethyl alcohol, ,Drinking alcohol ,"),
            vec!["Ethyl alcohol".to_string(), "Drinking alcohol".to_string()]
        );
        assert!(parse_synonyms("").is_empty());
    }

    #[test]
    fn test_join_synonyms() {
        let synonyms = vec!["Table Salt".to_string(), "Halite".to_string()];
        assert_eq!(join_synonyms(&synonyms), "Table Salt, Halite");
        assert_eq!(parse_synonyms(&join_synonyms(&synonyms)), synonyms);
    }

    #[test]
    fn test_deserialize_partial_draft() {
        let draft: ChemicalDraft =
            serde_json::from_str(r#"{"name":"Ethanol","shelf_id":3}"#).unwrap();
        assert_eq!(draft.name, "Ethanol");
        assert_eq!(draft.shelf_id, Some(3));
        assert!(draft.synonyms.is_empty());
    }
}
