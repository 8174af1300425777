use axum::{
    Json,
    extract::{Path, State},
};
use axum_cookie::CookieManager;
use campdir_core::domain::auth::{ports::AuthService, value_objects::ResetPasswordInput};
use validator::Validate;

use crate::application::http::auth::handlers::register::TokenResponse;
use crate::application::http::auth::handlers::set_token_cookie;
use crate::application::http::auth::validators::ResetPasswordValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    put,
    path = "/resetpassword/{reset_token}",
    tag = "auth",
    summary = "Reset password",
    description = "Redeem a mailed reset token for a new password and a fresh access token.",
    params(
        ("reset_token" = String, Path, description = "Reset token from the mail"),
    ),
    request_body = ResetPasswordValidator,
    responses(
        (status = 200, body = TokenResponse),
        (status = 400, description = "Invalid or expired token")
    ),
)]
pub async fn reset_password(
    Path(reset_token): Path<String>,
    State(state): State<AppState>,
    cookie: CookieManager,
    Json(payload): Json<ResetPasswordValidator>,
) -> Result<Response<TokenResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let output = state
        .service
        .reset_password(ResetPasswordInput {
            token: reset_token,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    set_token_cookie(&state, &cookie, &output.token);

    Ok(Response::OK(TokenResponse {
        success: true,
        token: output.token,
    }))
}
