use axum::extract::State;
use campdir_core::domain::course::ports::CourseService;
use campdir_core::domain::query::ListEnvelope;

use crate::application::http::query_extractor::ListQueryExtractor;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "course",
    summary = "Get courses",
    description = "List all courses with filtering, field selection, sorting and pagination.",
    responses(
        (status = 200, body = ListEnvelope)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<ListEnvelope>, ApiError> {
    let select = query.select.clone();

    let page = state
        .service
        .get_courses(query, None)
        .await
        .map_err(ApiError::from)?;

    let envelope = ListEnvelope::from_page(page, &select).map_err(ApiError::from)?;

    Ok(Response::OK(envelope))
}
