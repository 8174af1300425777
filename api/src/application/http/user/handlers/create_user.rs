use axum::{Json, extract::State};
use campdir_core::domain::user::{
    entities::User, ports::UserService, value_objects::CreateUserInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use crate::application::http::user::validators::CreateUserValidator;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateUserResponse {
    pub success: bool,
    pub data: User,
}

#[utoipa::path(
    post,
    path = "",
    tag = "user",
    summary = "Create user",
    description = "Create a user account. Admin only.",
    request_body = CreateUserValidator,
    responses(
        (status = 201, body = CreateUserResponse),
        (status = 400, description = "Validation failed or duplicate email"),
        (status = 403, description = "Forbidden")
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<CreateUserValidator>,
) -> Result<Response<CreateUserResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let user = state
        .service
        .create_user(
            identity,
            CreateUserInput {
                name: payload.name,
                email: payload.email,
                role: payload.role,
                password: payload.password,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateUserResponse {
        success: true,
        data: user,
    }))
}
