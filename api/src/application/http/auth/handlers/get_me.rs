use campdir_core::domain::user::entities::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::{
    api_error::ApiError, response::Response,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMeResponse {
    pub success: bool,
    pub data: User,
}

#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    summary = "Current user",
    description = "The account behind the presented access token.",
    responses(
        (status = 200, body = GetMeResponse),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn get_me(
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetMeResponse>, ApiError> {
    Ok(Response::OK(GetMeResponse {
        success: true,
        data: identity.user().clone(),
    }))
}
