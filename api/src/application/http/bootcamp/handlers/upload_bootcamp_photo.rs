use axum::extract::{Multipart, Path, State};
use bytes::Bytes;
use campdir_core::domain::bootcamp::{
    entities::Bootcamp, ports::BootcampService, value_objects::AttachPhotoInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UploadBootcampPhotoResponse {
    pub success: bool,
    pub data: Bootcamp,
}

#[utoipa::path(
    put,
    path = "/{bootcamp_id}/photo",
    tag = "bootcamp",
    summary = "Upload bootcamp photo",
    description = "Attach a photo to a bootcamp via a multipart `file` field.",
    params(
        ("bootcamp_id" = Uuid, Path, description = "Bootcamp ID"),
    ),
    responses(
        (status = 200, body = UploadBootcampPhotoResponse),
        (status = 400, description = "Missing file or not an image"),
        (status = 404, description = "Bootcamp not found")
    ),
)]
pub async fn upload_bootcamp_photo(
    Path(bootcamp_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    mut multipart: Multipart,
) -> Result<Response<UploadBootcampPhotoResponse>, ApiError> {
    let mut file: Option<(String, String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::BadRequest(format!("Invalid multipart payload: {e}"))
    })? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("photo").to_string();
            let mime_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let payload = field.bytes().await.map_err(|e| {
                ApiError::BadRequest(format!("Failed to read uploaded file: {e}"))
            })?;
            file = Some((filename, mime_type, payload));
        }
    }

    let (filename, mime_type, payload) =
        file.ok_or_else(|| ApiError::BadRequest("Please upload a file".to_string()))?;

    let bootcamp = state
        .service
        .attach_photo(
            identity,
            AttachPhotoInput {
                bootcamp_id,
                filename,
                mime_type,
                payload,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UploadBootcampPhotoResponse {
        success: true,
        data: bootcamp,
    }))
}
