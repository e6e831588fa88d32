//! Lookup gateway abstraction and implementations.
//!
//! This module contains:
//! - The `LookupGateway` trait the resolver talks to
//! - `GatewayConfig`, the explicit transport settings (base URLs, timeout, credential)
//! - The PubChem implementation
//!
//! Gateways only move data; the fallback policy lives in the resolver.

mod config;
mod traits;

pub mod pubchem;

pub use config::{
    GatewayConfig, DEFAULT_AUTOCOMPLETE_URL, DEFAULT_PUG_URL, DEFAULT_REQUEST_TIMEOUT,
    DEFAULT_SUGGESTION_LIMIT,
};
pub use traits::LookupGateway;
