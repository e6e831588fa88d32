//! Lookup models
//!
//! This module contains the core data types:
//! - `types` - Opaque identifiers (CompoundId)
//! - `formula` - Rendered formula tokens (FormulaToken, TokenKind)
//! - `compound` - Lookup input and output (CompoundQuery, CompoundProperties, ResolvedCompound)
//! - `draft` - Admin form state and the merge-only-if-present auto-fill (ChemicalDraft)

mod compound;
mod draft;
mod formula;
mod types;

pub(crate) use compound::CompoundCandidate;
pub use compound::{CompoundProperties, CompoundQuery, ResolvedCompound, MAX_SYNONYMS};
pub use draft::{join_synonyms, parse_synonyms, ChemicalDraft};
pub use formula::{FormulaToken, TokenKind};
pub use types::CompoundId;
