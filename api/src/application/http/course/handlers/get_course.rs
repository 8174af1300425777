use axum::extract::{Path, State};
use campdir_core::domain::course::{entities::Course, ports::CourseService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCourseResponse {
    pub success: bool,
    pub data: Course,
}

#[utoipa::path(
    get,
    path = "/{course_id}",
    tag = "course",
    summary = "Get course",
    description = "Fetch a single course with its bootcamp's name and description.",
    params(
        ("course_id" = Uuid, Path, description = "Course ID"),
    ),
    responses(
        (status = 200, body = GetCourseResponse),
        (status = 404, description = "Course not found")
    ),
)]
pub async fn get_course(
    Path(course_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetCourseResponse>, ApiError> {
    let course = state
        .service
        .get_course(course_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("No course found with id: {course_id}")))?;

    Ok(Response::OK(GetCourseResponse {
        success: true,
        data: course,
    }))
}
