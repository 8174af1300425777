use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReviewValidator {
    #[validate(length(min = 1, max = 100, message = "title is required (max 100 characters)"))]
    pub title: String,

    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,

    #[validate(range(min = 1, max = 10, message = "rating must be between 1 and 10"))]
    pub rating: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateReviewValidator {
    #[validate(length(min = 1, max = 100, message = "title cannot be empty (max 100 characters)"))]
    #[serde(default)]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "text cannot be empty"))]
    #[serde(default)]
    pub text: Option<String>,

    #[validate(range(min = 1, max = 10, message = "rating must be between 1 and 10"))]
    #[serde(default)]
    pub rating: Option<i32>,
}
