use axum::extract::{Path, State};
use campdir_core::domain::query::ListEnvelope;
use campdir_core::domain::review::ports::ReviewService;
use uuid::Uuid;

use crate::application::http::query_extractor::ListQueryExtractor;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{bootcamp_id}/reviews",
    tag = "review",
    summary = "Get bootcamp reviews",
    description = "List the reviews of one bootcamp.",
    params(
        ("bootcamp_id" = Uuid, Path, description = "Bootcamp ID"),
    ),
    responses(
        (status = 200, body = ListEnvelope)
    ),
)]
pub async fn get_bootcamp_reviews(
    Path(bootcamp_id): Path<Uuid>,
    State(state): State<AppState>,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<ListEnvelope>, ApiError> {
    let select = query.select.clone();

    let page = state
        .service
        .get_reviews(query, Some(bootcamp_id))
        .await
        .map_err(ApiError::from)?;

    let envelope = ListEnvelope::from_page(page, &select).map_err(ApiError::from)?;

    Ok(Response::OK(envelope))
}
