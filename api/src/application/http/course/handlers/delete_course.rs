use axum::extract::{Path, State};
use campdir_core::domain::course::ports::CourseService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteCourseResponse {
    pub success: bool,
    pub data: Option<()>,
}

#[utoipa::path(
    delete,
    path = "/{course_id}",
    tag = "course",
    summary = "Delete course",
    description = "Delete a course. Only its owner or an admin may do so.",
    params(
        ("course_id" = Uuid, Path, description = "Course ID"),
    ),
    responses(
        (status = 200, body = DeleteCourseResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Course not found")
    ),
)]
pub async fn delete_course(
    Path(course_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteCourseResponse>, ApiError> {
    state
        .service
        .delete_course(identity, course_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteCourseResponse {
        success: true,
        data: None,
    }))
}
