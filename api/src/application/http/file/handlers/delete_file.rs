use axum::extract::{Path, State};
use campdir_core::domain::storage::ports::FileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteFileResponse {
    pub success: bool,
    pub data: Option<()>,
}

#[utoipa::path(
    delete,
    path = "/{file_id}",
    tag = "file",
    summary = "Delete file",
    description = "Remove a stored object and its metadata. Uploader or admin only.",
    params(
        ("file_id" = Uuid, Path, description = "Stored object ID"),
    ),
    responses(
        (status = 200, body = DeleteFileResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "File not found")
    ),
)]
pub async fn delete_file(
    Path(file_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteFileResponse>, ApiError> {
    state
        .service
        .delete_file(identity, file_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteFileResponse {
        success: true,
        data: None,
    }))
}
