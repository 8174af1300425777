use axum::{
    Json,
    extract::{Path, State},
};
use campdir_core::domain::course::{
    entities::Course, ports::CourseService, value_objects::CreateCourseInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::auth::RequiredIdentity;
use crate::application::http::course::validators::CreateCourseValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateCourseResponse {
    pub success: bool,
    pub data: Course,
}

#[utoipa::path(
    post,
    path = "/{bootcamp_id}/courses",
    tag = "course",
    summary = "Add course",
    description = "Add a course to a bootcamp. Only the bootcamp owner or an admin may do so.",
    params(
        ("bootcamp_id" = Uuid, Path, description = "Bootcamp ID"),
    ),
    request_body = CreateCourseValidator,
    responses(
        (status = 201, body = CreateCourseResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Bootcamp not found")
    ),
)]
pub async fn create_course(
    Path(bootcamp_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<CreateCourseValidator>,
) -> Result<Response<CreateCourseResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let course = state
        .service
        .create_course(
            identity,
            bootcamp_id,
            CreateCourseInput {
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

    Ok(Response::Created(CreateCourseResponse {
        success: true,
        data: course,
    }))
}
