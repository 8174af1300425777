use campdir_core::domain::course::entities::MinimumSkill;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCourseValidator {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(range(min = 1, message = "weeks must be positive"))]
    pub weeks: i32,

    #[validate(range(min = 0, message = "tuition cannot be negative"))]
    pub tuition: i32,

    pub minimum_skill: MinimumSkill,

    #[serde(default)]
    pub scholarship_available: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseValidator {
    #[validate(length(min = 1, message = "title cannot be empty"))]
    #[serde(default)]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "description cannot be empty"))]
    #[serde(default)]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "weeks must be positive"))]
    #[serde(default)]
    pub weeks: Option<i32>,

    #[validate(range(min = 0, message = "tuition cannot be negative"))]
    #[serde(default)]
    pub tuition: Option<i32>,

    #[serde(default)]
    pub minimum_skill: Option<MinimumSkill>,

    #[serde(default)]
    pub scholarship_available: Option<bool>,
}
