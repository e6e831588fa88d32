//! PubChem PUG REST response models.
//!
//! Every field the resolver reads is optional or defaulted so a sparse
//! response decodes into "absent" values instead of failing.

use serde::Deserialize;

use crate::models::{CompoundId, CompoundProperties};

/// Response from `/compound/name/{name}/cids/JSON`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CidsResponse {
    pub identifier_list: Option<IdentifierList>,
}

#[derive(Debug, Deserialize)]
pub struct IdentifierList {
    #[serde(rename = "CID", default)]
    pub cid: Vec<u64>,
}

impl CidsResponse {
    pub fn into_ids(self) -> Vec<CompoundId> {
        self.identifier_list
            .map(|list| list.cid.into_iter().map(CompoundId::from).collect())
            .unwrap_or_default()
    }
}

/// Response from `/autocomplete/compound/{text}/json`
///
/// When nothing matches PubChem omits `dictionary_terms` entirely.
#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub dictionary_terms: Option<DictionaryTerms>,
    // Note: status and total fields exist but the term list is authoritative
}

#[derive(Debug, Deserialize)]
pub struct DictionaryTerms {
    #[serde(default)]
    pub compound: Vec<String>,
}

impl AutocompleteResponse {
    pub fn into_terms(self) -> Vec<String> {
        self.dictionary_terms
            .map(|terms| terms.compound)
            .unwrap_or_default()
    }
}

/// Response from `/compound/cid/{cid}/property/.../JSON`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyResponse {
    pub property_table: PropertyTable,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyTable {
    #[serde(default)]
    pub properties: Vec<PropertyRow>,
}

/// One row of the property table.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyRow {
    pub molecular_formula: Option<String>,
    #[serde(rename = "IUPACName")]
    pub iupac_name: Option<String>,
    pub title: Option<String>,
}

/// Response from `/compound/cid/{cid}/synonyms/JSON`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SynonymsResponse {
    pub information_list: Option<InformationList>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InformationList {
    #[serde(default)]
    pub information: Vec<SynonymInformation>,
}

#[derive(Debug, Deserialize)]
pub struct SynonymInformation {
    #[serde(rename = "Synonym")]
    pub synonym: Option<Vec<String>>,
}

impl SynonymsResponse {
    pub fn into_synonyms(self) -> Option<Vec<String>> {
        self.information_list?
            .information
            .into_iter()
            .next()
            .and_then(|info| info.synonym)
    }
}

/// Combine the property row and synonym list into the gateway output.
pub fn to_properties(
    row: Option<PropertyRow>,
    synonyms: Option<Vec<String>>,
) -> CompoundProperties {
    let (formula, display_name) = match row {
        Some(row) => (row.molecular_formula, row.title.or(row.iupac_name)),
        None => (None, None),
    };

    CompoundProperties {
        formula,
        display_name,
        synonyms,
    }
}
