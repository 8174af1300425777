use axum::extract::State;
use campdir_core::domain::query::ListEnvelope;
use campdir_core::domain::storage::ports::FileService;

use crate::application::auth::RequiredIdentity;
use crate::application::http::query_extractor::ListQueryExtractor;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "file",
    summary = "List files",
    description = "List stored objects with filtering, field selection, sorting and pagination.",
    responses(
        (status = 200, body = ListEnvelope),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn list_files(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<ListEnvelope>, ApiError> {
    let select = query.select.clone();

    let page = state
        .service
        .list_files(identity, query)
        .await
        .map_err(ApiError::from)?;

    let envelope = ListEnvelope::from_page(page, &select).map_err(ApiError::from)?;

    Ok(Response::OK(envelope))
}
