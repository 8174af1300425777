use axum::extract::{Path, State};
use campdir_core::domain::bootcamp::ports::BootcampService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteBootcampResponse {
    pub success: bool,
    pub data: Option<()>,
}

#[utoipa::path(
    delete,
    path = "/{bootcamp_id}",
    tag = "bootcamp",
    summary = "Delete bootcamp",
    description = "Delete a bootcamp along with its courses and reviews.",
    params(
        ("bootcamp_id" = Uuid, Path, description = "Bootcamp ID"),
    ),
    responses(
        (status = 200, body = DeleteBootcampResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Bootcamp not found")
    ),
)]
pub async fn delete_bootcamp(
    Path(bootcamp_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteBootcampResponse>, ApiError> {
    state
        .service
        .delete_bootcamp(identity, bootcamp_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteBootcampResponse {
        success: true,
        data: None,
    }))
}
