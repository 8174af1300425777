use axum::{Json, extract::State};
use campdir_core::domain::bootcamp::{
    entities::Bootcamp, ports::BootcampService, value_objects::CreateBootcampInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::auth::RequiredIdentity;
use crate::application::http::bootcamp::validators::CreateBootcampValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateBootcampResponse {
    pub success: bool,
    pub data: Bootcamp,
}

#[utoipa::path(
    post,
    path = "",
    tag = "bootcamp",
    summary = "Create bootcamp",
    description = "Publish a new bootcamp. Requires the publisher or admin role.",
    request_body = CreateBootcampValidator,
    responses(
        (status = 201, body = CreateBootcampResponse),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden")
    ),
)]
pub async fn create_bootcamp(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<CreateBootcampValidator>,
) -> Result<Response<CreateBootcampResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let bootcamp = state
        .service
        .create_bootcamp(
            identity,
            CreateBootcampInput {
                name: payload.name,
                description: payload.description,
                website: payload.website,
                email: payload.email,
                phone: payload.phone,
                address: payload.address,
                zipcode: payload.zipcode,
                careers: payload.careers,
                housing: payload.housing,
                job_assistance: payload.job_assistance,
                job_guarantee: payload.job_guarantee,
                accept_gi: payload.accept_gi,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateBootcampResponse {
        success: true,
        data: bootcamp,
    }))
}
