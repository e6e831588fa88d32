use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{
        AutofillRequest, ChemicalDraft, CompoundLookup, CompoundLookupRequest, FormulaRender,
        FormulaToken, TokenKind,
    },
};

pub mod compounds;
pub mod formula;

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/v1/readyz", responses((status = 200, description = "Ready")))]
pub async fn readyz() -> &'static str {
    "ok"
}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        readyz,
        formula::render_formula,
        compounds::lookup_compound,
        compounds::autofill_draft
    ),
    components(schemas(
        FormulaRender,
        FormulaToken,
        TokenKind,
        CompoundLookupRequest,
        CompoundLookup,
        AutofillRequest,
        ChemicalDraft
    )),
    tags((name = "chemtrack"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Skipping invalid CORS origin {:?}", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .merge(formula::router())
        .merge(compounds::router());

    Router::new()
        .nest("/api/v1", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.effective_request_timeout()))
        .layer(TraceLayer::new_for_http())
}
