use axum::{Json, extract::State};
use axum_cookie::CookieManager;
use campdir_core::domain::auth::{ports::AuthService, value_objects::LoginInput};
use validator::Validate;

use crate::application::http::auth::handlers::register::TokenResponse;
use crate::application::http::auth::handlers::set_token_cookie;
use crate::application::http::auth::validators::LoginValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Login",
    description = "Exchange credentials for a signed access token.",
    request_body = LoginValidator,
    responses(
        (status = 200, body = TokenResponse),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Invalid credentials")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    cookie: CookieManager,
    Json(payload): Json<LoginValidator>,
) -> Result<Response<TokenResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let output = state
        .service
        .login(LoginInput {
            email: payload.email,
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
