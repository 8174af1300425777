use axum::extract::{Path, State};
use campdir_core::domain::bootcamp::{entities::Bootcamp, ports::BootcampService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetBootcampResponse {
    pub success: bool,
    pub data: Bootcamp,
}

#[utoipa::path(
    get,
    path = "/{bootcamp_id}",
    tag = "bootcamp",
    summary = "Get bootcamp",
    description = "Fetch a single bootcamp with its courses.",
    params(
        ("bootcamp_id" = Uuid, Path, description = "Bootcamp ID"),
    ),
    responses(
        (status = 200, body = GetBootcampResponse),
        (status = 404, description = "Bootcamp not found")
    ),
)]
pub async fn get_bootcamp(
    Path(bootcamp_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetBootcampResponse>, ApiError> {
    let bootcamp = state
        .service
        .get_bootcamp(bootcamp_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Bootcamp not found with id of: {bootcamp_id}"))
        })?;

    Ok(Response::OK(GetBootcampResponse {
        success: true,
        data: bootcamp,
    }))
}
