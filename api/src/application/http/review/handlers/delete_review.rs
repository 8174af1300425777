use axum::extract::{Path, State};
use campdir_core::domain::review::ports::ReviewService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteReviewResponse {
    pub success: bool,
    pub data: Option<()>,
}

#[utoipa::path(
    delete,
    path = "/{review_id}",
    tag = "review",
    summary = "Delete review",
    description = "Delete a review. Only its author or an admin may do so.",
    params(
        ("review_id" = Uuid, Path, description = "Review ID"),
    ),
    responses(
        (status = 200, body = DeleteReviewResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Review not found")
    ),
)]
pub async fn delete_review(
    Path(review_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteReviewResponse>, ApiError> {
    state
        .service
        .delete_review(identity, review_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteReviewResponse {
        success: true,
        data: None,
    }))
}
