use axum::extract::{Path, State};
use campdir_core::domain::review::{entities::Review, ports::ReviewService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetReviewResponse {
    pub success: bool,
    pub data: Review,
}

#[utoipa::path(
    get,
    path = "/{review_id}",
    tag = "review",
    summary = "Get review",
    params(
        ("review_id" = Uuid, Path, description = "Review ID"),
    ),
    responses(
        (status = 200, body = GetReviewResponse),
        (status = 404, description = "Review not found")
    ),
)]
pub async fn get_review(
    Path(review_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetReviewResponse>, ApiError> {
    let review = state
        .service
        .get_review(review_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("No review found with id: {review_id}")))?;

    Ok(Response::OK(GetReviewResponse {
        success: true,
        data: review,
    }))
}
