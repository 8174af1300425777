use axum::{Json, extract::State};
use axum_cookie::CookieManager;
use campdir_core::domain::auth::{ports::AuthService, value_objects::RegisterInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::auth::handlers::set_token_cookie;
use crate::application::http::auth::validators::RegisterValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TokenResponse {
    pub success: bool,
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Register",
    description = "Create an account and receive a signed access token.",
    request_body = RegisterValidator,
    responses(
        (status = 201, body = TokenResponse),
        (status = 400, description = "Validation failed or duplicate email")
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    cookie: CookieManager,
    Json(payload): Json<RegisterValidator>,
) -> Result<Response<TokenResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let output = state
        .service
        .register(RegisterInput {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            role: payload.role,
        })
        .await
        .map_err(ApiError::from)?;

    set_token_cookie(&state, &cookie, &output.token);

    Ok(Response::Created(TokenResponse {
        success: true,
        token: output.token,
    }))
}
