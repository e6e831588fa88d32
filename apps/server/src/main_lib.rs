use std::sync::Arc;

use chemtrack_lookup::{CompoundResolver, LookupGateway, PubChemGateway};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub resolver: CompoundResolver,
}

pub fn init_tracing() {
    let log_format = std::env::var("CT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    if config.gateway.pug_url.trim().is_empty() {
        anyhow::bail!("CT_PUBCHEM_PUG_URL must not be empty");
    }
    if config.gateway.autocomplete_url.trim().is_empty() {
        anyhow::bail!("CT_PUBCHEM_AUTOCOMPLETE_URL must not be empty");
    }

    tracing::info!(
        "PubChem endpoints: {} (autocomplete {}), timeout {:?}",
        config.gateway.pug_url,
        config.gateway.autocomplete_url,
        config.gateway.request_timeout
    );

    let gateway: Arc<dyn LookupGateway> = Arc::new(PubChemGateway::new(config.gateway.clone()));
    Ok(build_state_with_gateway(gateway))
}

/// State over an arbitrary gateway, used by tests and alternate backends.
pub fn build_state_with_gateway(gateway: Arc<dyn LookupGateway>) -> Arc<AppState> {
    Arc::new(AppState {
        resolver: CompoundResolver::new(gateway),
    })
}
