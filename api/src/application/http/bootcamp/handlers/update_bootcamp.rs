use axum::{
    Json,
    extract::{Path, State},
};
use campdir_core::domain::bootcamp::{
    entities::Bootcamp, ports::BootcampService, value_objects::UpdateBootcampInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::auth::RequiredIdentity;
use crate::application::http::bootcamp::validators::UpdateBootcampValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateBootcampResponse {
    pub success: bool,
    pub data: Bootcamp,
}

#[utoipa::path(
    put,
    path = "/{bootcamp_id}",
    tag = "bootcamp",
    summary = "Update bootcamp",
    description = "Update a bootcamp. Only its owner or an admin may do so.",
    params(
        ("bootcamp_id" = Uuid, Path, description = "Bootcamp ID"),
    ),
    request_body = UpdateBootcampValidator,
    responses(
        (status = 200, body = UpdateBootcampResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Bootcamp not found")
    ),
)]
pub async fn update_bootcamp(
    Path(bootcamp_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<UpdateBootcampValidator>,
) -> Result<Response<UpdateBootcampResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let bootcamp = state
        .service
        .update_bootcamp(
            identity,
            UpdateBootcampInput {
                bootcamp_id,
                name: payload.name,
                description: payload.description,
                website: payload.website,
                email: payload.email,
                phone: payload.phone,
                address: payload.address,
                careers: payload.careers,
                housing: payload.housing,
                job_assistance: payload.job_assistance,
                job_guarantee: payload.job_guarantee,
                accept_gi: payload.accept_gi,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateBootcampResponse {
        success: true,
        data: bootcamp,
    }))
}
