use axum::{Json, extract::State};
use axum_cookie::CookieManager;
use campdir_core::domain::auth::{ports::AuthService, value_objects::UpdatePasswordInput};
use validator::Validate;

use crate::application::auth::RequiredIdentity;
use crate::application::http::auth::handlers::register::TokenResponse;
use crate::application::http::auth::handlers::set_token_cookie;
use crate::application::http::auth::validators::UpdatePasswordValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    put,
    path = "/updatepassword",
    tag = "auth",
    summary = "Update password",
    description = "Change the current user's password; a fresh token is issued.",
    request_body = UpdatePasswordValidator,
    responses(
        (status = 200, body = TokenResponse),
        (status = 401, description = "Current password does not match")
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    cookie: CookieManager,
    Json(payload): Json<UpdatePasswordValidator>,
) -> Result<Response<TokenResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let output = state
        .service
        .update_password(
            identity,
            UpdatePasswordInput {
                current_password: payload.current_password,
                new_password: payload.new_password,
            },
        )
        .await
        .map_err(ApiError::from)?;

    set_token_cookie(&state, &cookie, &output.token);

    Ok(Response::OK(TokenResponse {
        success: true,
        token: output.token,
    }))
}
