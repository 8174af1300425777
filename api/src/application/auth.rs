use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use campdir_core::domain::auth::{ports::AuthService, value_objects::Identity};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Best-effort authentication middleware: a valid bearer token attaches an
/// [`Identity`] extension, anything else passes through anonymously. Handlers
/// that need a principal use [`RequiredIdentity`].
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Some(auth_header) = req.headers().get("authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
        && !token.is_empty()
        && let Ok(identity) = state.service.authenticate(token.to_string()).await
    {
        req.extensions_mut().insert(identity);
    }

    Ok(next.run(req).await)
}

/// Extractor enforcing an authenticated principal.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // The middleware usually has done the work already.
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                ApiError::Unauthorized("Not authorized to access this route".to_string())
            })?;

        let app_state = AppState::from_ref(state);
        let identity = app_state
            .service
            .authenticate(bearer.token().to_string())
            .await
            .map_err(ApiError::from)?;

        parts.extensions.insert(identity.clone());

        Ok(RequiredIdentity(identity))
    }
}
