use axum::extract::{Multipart, State};
use bytes::Bytes;
use campdir_core::domain::storage::{
    entities::StoredObject, ports::FileService, value_objects::UploadFileInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UploadFileResponse {
    pub success: bool,
    pub data: StoredObject,
}

#[utoipa::path(
    post,
    path = "",
    tag = "file",
    summary = "Upload file",
    description = "Upload a file (multipart `file` field, optional `metadata` JSON field) \
                   to object storage. Maximum size 50 MB.",
    responses(
        (status = 201, body = UploadFileResponse),
        (status = 400, description = "Missing file or file too large"),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    mut multipart: Multipart,
) -> Result<Response<UploadFileResponse>, ApiError> {
    let mut file: Option<(String, String, Bytes)> = None;
    let mut metadata = serde_json::Value::Null;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::BadRequest(format!("Invalid multipart payload: {e}"))
    })? {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let payload = field.bytes().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read uploaded file: {e}"))
                })?;
                file = Some((filename, mime_type, payload));
            }
            Some("metadata") => {
                let raw = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read metadata field: {e}"))
                })?;
                metadata = serde_json::from_str(&raw).map_err(|e| {
                    ApiError::BadRequest(format!("metadata must be valid JSON: {e}"))
                })?;
            }
            _ => {}
        }
    }

    let (filename, mime_type, payload) =
        file.ok_or_else(|| ApiError::BadRequest("Please upload a file".to_string()))?;

    let stored_object = state
        .service
        .upload_file(
            identity,
            UploadFileInput {
                filename,
                mime_type,
                payload,
                metadata,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(UploadFileResponse {
        success: true,
        data: stored_object,
    }))
}
