use axum::{
    Json,
    extract::{Path, State},
};
use campdir_core::domain::user::{
    entities::User, ports::UserService, value_objects::UpdateUserInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use crate::application::http::user::validators::UpdateUserValidator;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateUserResponse {
    pub success: bool,
    pub data: User,
}

#[utoipa::path(
    put,
    path = "/{user_id}",
    tag = "user",
    summary = "Update user",
    description = "Update a user account. Admin only.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    request_body = UpdateUserValidator,
    responses(
        (status = 200, body = UpdateUserResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    ),
)]
pub async fn update_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<UpdateUserValidator>,
) -> Result<Response<UpdateUserResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let user = state
        .service
        .update_user(
            identity,
            UpdateUserInput {
                user_id,
                name: payload.name,
                email: payload.email,
                role: payload.role,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateUserResponse {
        success: true,
        data: user,
    }))
}
