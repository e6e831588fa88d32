use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use chemtrack_lookup::{ChemicalDraft as LookupDraft, CompoundQuery};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{AutofillRequest, ChemicalDraft, CompoundLookup, CompoundLookupRequest},
};

/// Resolve a name or formula through PubChem.
#[utoipa::path(
    post,
    path = "/api/v1/compounds/lookup",
    request_body = CompoundLookupRequest,
    responses(
        (status = 200, body = CompoundLookup),
        (status = 400, description = "Blank query"),
        (status = 404, description = "No compound found"),
        (status = 502, description = "PubChem unreachable")
    )
)]
pub async fn lookup_compound(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CompoundLookupRequest>, JsonRejection>,
) -> ApiResult<Json<CompoundLookup>> {
    let Json(body) = body?;
    let compound = state
        .resolver
        .resolve(&CompoundQuery::new(body.query))
        .await?;
    Ok(Json(CompoundLookup::from(compound)))
}

/// Resolve a query and merge the result into a chemical draft.
///
/// Fields the lookup did not produce keep their draft values.
#[utoipa::path(
    post,
    path = "/api/v1/compounds/autofill",
    request_body = AutofillRequest,
    responses(
        (status = 200, body = ChemicalDraft),
        (status = 400, description = "Blank query"),
        (status = 404, description = "No compound found"),
        (status = 502, description = "PubChem unreachable")
    )
)]
pub async fn autofill_draft(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AutofillRequest>, JsonRejection>,
) -> ApiResult<Json<ChemicalDraft>> {
    let Json(body) = body?;
    let compound = state
        .resolver
        .resolve(&CompoundQuery::new(body.query))
        .await?;

    let mut draft = LookupDraft::from(body.draft);
    draft.apply_lookup(&compound);
    Ok(Json(draft.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/compounds/lookup", post(lookup_compound))
        .route("/compounds/autofill", post(autofill_draft))
}
