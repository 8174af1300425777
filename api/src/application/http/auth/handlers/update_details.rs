use axum::{Json, extract::State};
use campdir_core::domain::auth::{ports::AuthService, value_objects::UpdateDetailsInput};
use campdir_core::domain::user::entities::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::auth::RequiredIdentity;
use crate::application::http::auth::validators::UpdateDetailsValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateDetailsResponse {
    pub success: bool,
    pub data: User,
}

#[utoipa::path(
    put,
    path = "/updatedetails",
    tag = "auth",
    summary = "Update details",
    description = "Change the current user's name or email.",
    request_body = UpdateDetailsValidator,
    responses(
        (status = 200, body = UpdateDetailsResponse),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn update_details(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<UpdateDetailsValidator>,
) -> Result<Response<UpdateDetailsResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let user = state
        .service
        .update_details(
            identity,
            UpdateDetailsInput {
                name: payload.name,
                email: payload.email,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateDetailsResponse {
        success: true,
        data: user,
    }))
}
