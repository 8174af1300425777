use axum::extract::State;
use campdir_core::domain::query::ListEnvelope;
use campdir_core::domain::user::ports::UserService;

use crate::application::auth::RequiredIdentity;
use crate::application::http::query_extractor::ListQueryExtractor;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "user",
    summary = "Get users",
    description = "List users with filtering, field selection, sorting and pagination. Admin only.",
    responses(
        (status = 200, body = ListEnvelope),
        (status = 403, description = "Forbidden")
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<ListEnvelope>, ApiError> {
    let select = query.select.clone();

    let page = state
        .service
        .get_users(identity, query)
        .await
        .map_err(ApiError::from)?;

    let envelope = ListEnvelope::from_page(page, &select).map_err(ApiError::from)?;

    Ok(Response::OK(envelope))
}
