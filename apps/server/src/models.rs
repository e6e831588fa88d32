use chemtrack_lookup::{self as lookup, to_html, to_latex, tokenize};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Normal,
    Subscript,
    Superscript,
}

impl From<lookup::TokenKind> for TokenKind {
    fn from(kind: lookup::TokenKind) -> Self {
        match kind {
            lookup::TokenKind::Normal => Self::Normal,
            lookup::TokenKind::Subscript => Self::Subscript,
            lookup::TokenKind::Superscript => Self::Superscript,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormulaToken {
    pub text: String,
    pub kind: TokenKind,
}

impl From<lookup::FormulaToken> for FormulaToken {
    fn from(token: lookup::FormulaToken) -> Self {
        Self {
            text: token.text.to_string(),
            kind: token.kind.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FormulaRender {
    pub formula: String,
    pub latex: String,
    pub html: String,
    pub tokens: Vec<FormulaToken>,
}

impl FormulaRender {
    pub fn render(formula: &str) -> Self {
        Self {
            formula: formula.to_string(),
            latex: to_latex(formula),
            html: to_html(formula),
            tokens: tokenize(formula).into_iter().map(FormulaToken::from).collect(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct FormulaRenderQuery {
    pub formula: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CompoundLookupRequest {
    pub query: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CompoundLookup {
    pub name: String,
    pub formula: String,
    pub formula_latex: String,
    pub synonyms: Vec<String>,
    pub structure_image_url: Option<String>,
}

impl From<lookup::ResolvedCompound> for CompoundLookup {
    fn from(c: lookup::ResolvedCompound) -> Self {
        Self {
            formula_latex: to_latex(&c.formula),
            name: c.name,
            formula: c.formula,
            synonyms: c.synonyms,
            structure_image_url: c.structure_image_url,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChemicalDraft {
    pub name: String,
    #[serde(alias = "shelf_id")]
    pub shelf_id: Option<i64>,
    pub formula: String,
    #[serde(alias = "formula_latex")]
    pub formula_latex: String,
    pub synonyms: Vec<String>,
    pub location: String,
    #[serde(alias = "msds_url")]
    pub msds_url: Option<String>,
    #[serde(alias = "structure_2d_url")]
    pub structure_2d_url: Option<String>,
    #[serde(alias = "structure_3d_url")]
    pub structure_3d_url: Option<String>,
    #[serde(alias = "bottle_number")]
    pub bottle_number: String,
    #[serde(alias = "is_concentrated")]
    pub is_concentrated: bool,
}

impl From<lookup::ChemicalDraft> for ChemicalDraft {
    fn from(d: lookup::ChemicalDraft) -> Self {
        Self {
            name: d.name,
            shelf_id: d.shelf_id,
            formula: d.formula,
            formula_latex: d.formula_latex,
            synonyms: d.synonyms,
            location: d.location,
            msds_url: d.msds_url,
            structure_2d_url: d.structure_2d_url,
            structure_3d_url: d.structure_3d_url,
            bottle_number: d.bottle_number,
            is_concentrated: d.is_concentrated,
        }
    }
}

impl From<ChemicalDraft> for lookup::ChemicalDraft {
    fn from(d: ChemicalDraft) -> Self {
        Self {
            name: d.name,
            shelf_id: d.shelf_id,
            formula: d.formula,
            formula_latex: d.formula_latex,
            synonyms: d.synonyms,
            location: d.location,
            msds_url: d.msds_url,
            structure_2d_url: d.structure_2d_url,
            structure_3d_url: d.structure_3d_url,
            bottle_number: d.bottle_number,
            is_concentrated: d.is_concentrated,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AutofillRequest {
    pub query: String,
    #[serde(default)]
    pub draft: ChemicalDraft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_accepts_snake_case_form_fields() {
        let draft: ChemicalDraft = serde_json::from_value(serde_json::json!({
            "shelf_id": 4,
            "bottle_number": "9",
            "structure_2d_url": "a.png",
            "is_concentrated": true
        }))
        .unwrap();
        assert_eq!(draft.shelf_id, Some(4));
        assert_eq!(draft.bottle_number, "9");
        assert_eq!(draft.structure_2d_url.as_deref(), Some("a.png"));
        assert!(draft.is_concentrated);
    }

    #[test]
    fn draft_serializes_camel_case() {
        let draft = ChemicalDraft {
            shelf_id: Some(1),
            ..ChemicalDraft::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["shelfId"], 1);
        assert!(json.get("shelf_id").is_none());
    }
}
