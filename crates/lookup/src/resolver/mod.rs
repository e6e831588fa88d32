//! Compound resolution against a lookup gateway.
//!
//! The resolver is an explicit state machine:
//!
//! ```text
//! DirectSearch ──hit──────────────────────────────┐
//!      │ miss / unsuccessful                       │
//!      ▼                                           ▼
//! NeedsSuggestions ──none / unsuccessful──▶ Failed  PropertyFetch ──▶ Resolved
//!      │ 1..=5 suggestions                   ▲         ▲   │
//!      ▼                                     │         │   └─unsuccessful──▶ Failed
//! TrySuggestion(i) ──all missed──────────────┘         │
//!      │ hit ──────────────────────────────────────────┘
//!      └─ miss ─▶ TrySuggestion(i + 1)
//! ```
//!
//! Transport errors move any state straight to `Failed`.

mod compound_resolver;
mod state;

pub use compound_resolver::CompoundResolver;
pub use state::{
    EMPTY_QUERY, FETCH_FAILED, MAX_SUGGESTIONS, NO_MATCHES, NO_SUGGESTIONS, SEARCH_FAILED,
};
