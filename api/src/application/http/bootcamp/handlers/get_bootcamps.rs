use axum::extract::State;
use campdir_core::domain::bootcamp::ports::BootcampService;
use campdir_core::domain::query::ListEnvelope;

use crate::application::http::query_extractor::ListQueryExtractor;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "bootcamp",
    summary = "Get bootcamps",
    description = "List bootcamps with filtering (`field=op:value`), field selection, \
                   sorting and pagination; each record carries its courses.",
    responses(
        (status = 200, body = ListEnvelope)
    ),
)]
pub async fn get_bootcamps(
    State(state): State<AppState>,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<ListEnvelope>, ApiError> {
    let select = query.select.clone();

    let page = state
        .service
        .get_bootcamps(query)
        .await
        .map_err(ApiError::from)?;

    let envelope = ListEnvelope::from_page(page, &select).map_err(ApiError::from)?;

    Ok(Response::OK(envelope))
}
