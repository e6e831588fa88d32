use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query},
    routing::get,
    Json, Router,
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{FormulaRender, FormulaRenderQuery},
};

/// Render a formula as tokens, LaTeX and HTML.
#[utoipa::path(
    get,
    path = "/api/v1/formula/render",
    params(("formula" = String, Query, description = "Formula text, e.g. H2SO4")),
    responses(
        (status = 200, body = FormulaRender),
        (status = 400, description = "Missing formula parameter")
    )
)]
pub async fn render_formula(
    query: Result<Query<FormulaRenderQuery>, QueryRejection>,
) -> ApiResult<Json<FormulaRender>> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let formula = query
        .formula
        .ok_or_else(|| ApiError::BadRequest("Missing formula parameter".to_string()))?;
    Ok(Json(FormulaRender::render(&formula)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/formula/render", get(render_formula))
}
