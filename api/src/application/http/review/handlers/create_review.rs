use axum::{
    Json,
    extract::{Path, State},
};
use campdir_core::domain::review::{
    entities::Review, ports::ReviewService, value_objects::CreateReviewInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::auth::RequiredIdentity;
use crate::application::http::review::validators::CreateReviewValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateReviewResponse {
    pub success: bool,
    pub data: Review,
}

#[utoipa::path(
    post,
    path = "/{bootcamp_id}/reviews",
    tag = "review",
    summary = "Add review",
    description = "Review a bootcamp. One review per user per bootcamp.",
    params(
        ("bootcamp_id" = Uuid, Path, description = "Bootcamp ID"),
    ),
    request_body = CreateReviewValidator,
    responses(
        (status = 201, body = CreateReviewResponse),
        (status = 400, description = "Validation failed or duplicate review"),
        (status = 404, description = "Bootcamp not found")
    ),
)]
pub async fn create_review(
    Path(bootcamp_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<CreateReviewValidator>,
) -> Result<Response<CreateReviewResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let review = state
        .service
        .create_review(
            identity,
            bootcamp_id,
            CreateReviewInput {
                title: payload.title,
                text: payload.text,
                rating: payload.rating,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateReviewResponse {
        success: true,
        data: review,
    }))
}
