use axum::extract::{Path, State};
use campdir_core::domain::storage::{entities::PresignedUrl, ports::FileService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDownloadUrlResponse {
    pub success: bool,
    pub data: PresignedUrl,
}

#[utoipa::path(
    get,
    path = "/{file_id}/download",
    tag = "file",
    summary = "Get download URL",
    description = "Presigned download URL for a stored object (expires after five minutes).",
    params(
        ("file_id" = Uuid, Path, description = "Stored object ID"),
    ),
    responses(
        (status = 200, body = GetDownloadUrlResponse),
        (status = 404, description = "File not found")
    ),
)]
pub async fn get_download_url(
    Path(file_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetDownloadUrlResponse>, ApiError> {
    let presigned_url = state
        .service
        .get_download_url(identity, file_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDownloadUrlResponse {
        success: true,
        data: presigned_url,
    }))
}
