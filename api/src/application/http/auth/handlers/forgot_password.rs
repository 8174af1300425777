use axum::{Json, extract::State};
use campdir_core::domain::auth::{ports::AuthService, value_objects::ForgotPasswordInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::auth::validators::ForgotPasswordValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForgotPasswordResponse {
    pub success: bool,
    pub data: String,
}

#[utoipa::path(
    post,
    path = "/forgotpassword",
    tag = "auth",
    summary = "Forgot password",
    description = "Mail a short-lived reset token to the given address.",
    request_body = ForgotPasswordValidator,
    responses(
        (status = 200, body = ForgotPasswordResponse),
        (status = 404, description = "No user with that email"),
        (status = 500, description = "Mail could not be sent")
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordValidator>,
) -> Result<Response<ForgotPasswordResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let reset_url_base = format!(
        "{}/auth/resetpassword",
        state.args.server.root_path.trim_end_matches('/')
    );

    state
        .service
        .forgot_password(ForgotPasswordInput {
            email: payload.email,
            reset_url_base,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ForgotPasswordResponse {
        success: true,
        data: "Email sent".to_string(),
    }))
}
