use axum::extract::{Path, State};
use campdir_core::domain::user::ports::UserService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteUserResponse {
    pub success: bool,
    pub data: Option<()>,
}

#[utoipa::path(
    delete,
    path = "/{user_id}",
    tag = "user",
    summary = "Delete user",
    description = "Delete a user account. Admin only.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = DeleteUserResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    ),
)]
pub async fn delete_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteUserResponse>, ApiError> {
    state
        .service
        .delete_user(identity, user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteUserResponse {
        success: true,
        data: None,
    }))
}
