//! ChemTrack Lookup Crate
//!
//! Formula presentation and compound lookup for the ChemTrack inventory.
//!
//! # Overview
//!
//! The crate has two independent parts:
//! - [`formula`]: pure renderings of a formula string (tokens, LaTeX, HTML)
//! - [`resolver`]: resolves a name or formula to a [`ResolvedCompound`] through a
//!   [`LookupGateway`], falling back to autocomplete suggestions when the direct
//!   search misses
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |    UI / server   | --> |  CompoundQuery   |
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | CompoundResolver |  (state machine)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  LookupGateway   |  (PubChem, test doubles)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | ResolvedCompound |
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`CompoundQuery`] - Free-text lookup input
//! - [`ResolvedCompound`] - Normalized lookup output
//! - [`ChemicalDraft`] - Admin form state, merged with lookup results
//! - [`FormulaToken`] - One rendered formula character
//! - [`LookupError`] - Invalid query, lookup failure or transport failure

pub mod errors;
pub mod formula;
pub mod gateway;
pub mod models;
pub mod resolver;

pub use errors::{GatewayError, LookupError, RetryClass};
pub use formula::{to_html, to_latex, tokenize};
pub use gateway::pubchem::PubChemGateway;
pub use gateway::{GatewayConfig, LookupGateway};
pub use models::{
    join_synonyms, parse_synonyms, ChemicalDraft, CompoundId, CompoundProperties, CompoundQuery,
    FormulaToken, ResolvedCompound, TokenKind,
};
pub use resolver::CompoundResolver;
