use axum::extract::State;
use campdir_core::domain::query::ListEnvelope;
use campdir_core::domain::review::ports::ReviewService;

use crate::application::http::query_extractor::ListQueryExtractor;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "review",
    summary = "Get reviews",
    description = "List all reviews with filtering, field selection, sorting and pagination.",
    responses(
        (status = 200, body = ListEnvelope)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<ListEnvelope>, ApiError> {
    let select = query.select.clone();

    let page = state
        .service
        .get_reviews(query, None)
        .await
        .map_err(ApiError::from)?;

    let envelope = ListEnvelope::from_page(page, &select).map_err(ApiError::from)?;

    Ok(Response::OK(envelope))
}
