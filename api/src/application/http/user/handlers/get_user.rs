use axum::extract::{Path, State};
use campdir_core::domain::user::{entities::User, ports::UserService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUserResponse {
    pub success: bool,
    pub data: User,
}

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "user",
    summary = "Get user",
    description = "Fetch a single user. Admin only.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = GetUserResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    ),
)]
pub async fn get_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetUserResponse>, ApiError> {
    let user = state
        .service
        .get_user(identity, user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("No user found with id: {user_id}")))?;

    Ok(Response::OK(GetUserResponse {
        success: true,
        data: user,
    }))
}
