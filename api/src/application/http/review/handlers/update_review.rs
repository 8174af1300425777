use axum::{
    Json,
    extract::{Path, State},
};
use campdir_core::domain::review::{
    entities::Review, ports::ReviewService, value_objects::UpdateReviewInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::auth::RequiredIdentity;
use crate::application::http::review::validators::UpdateReviewValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateReviewResponse {
    pub success: bool,
    pub data: Review,
}

#[utoipa::path(
    put,
    path = "/{review_id}",
    tag = "review",
    summary = "Update review",
    description = "Update a review. Only its author or an admin may do so.",
    params(
        ("review_id" = Uuid, Path, description = "Review ID"),
    ),
    request_body = UpdateReviewValidator,
    responses(
        (status = 200, body = UpdateReviewResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Review not found")
    ),
)]
pub async fn update_review(
    Path(review_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<UpdateReviewValidator>,
) -> Result<Response<UpdateReviewResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let review = state
        .service
        .update_review(
            identity,
            UpdateReviewInput {
                review_id,
                title: payload.title,
                text: payload.text,
                rating: payload.rating,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateReviewResponse {
        success: true,
        data: review,
    }))
}
