use axum::{
    Json,
    extract::{Path, State},
};
use campdir_core::domain::course::{
    entities::Course, ports::CourseService, value_objects::UpdateCourseInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::auth::RequiredIdentity;
use crate::application::http::course::validators::UpdateCourseValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateCourseResponse {
    pub success: bool,
    pub data: Course,
}

#[utoipa::path(
    put,
    path = "/{course_id}",
    tag = "course",
    summary = "Update course",
    description = "Update a course. Only its owner or an admin may do so.",
    params(
        ("course_id" = Uuid, Path, description = "Course ID"),
    ),
    request_body = UpdateCourseValidator,
    responses(
        (status = 200, body = UpdateCourseResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Course not found")
    ),
)]
pub async fn update_course(
    Path(course_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<UpdateCourseValidator>,
) -> Result<Response<UpdateCourseResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let course = state
        .service
        .update_course(
            identity,
            UpdateCourseInput {
                course_id,
                title: payload.title,
                description: payload.description,
                weeks: payload.weeks,
                tuition: payload.tuition,
                minimum_skill: payload.minimum_skill,
                scholarship_available: payload.scholarship_available,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateCourseResponse {
        success: true,
        data: course,
    }))
}
