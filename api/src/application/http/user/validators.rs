use campdir_core::domain::user::entities::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(email(message = "email must be valid"))]
    pub email: String,

    #[serde(default)]
    pub role: UserRole,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserValidator {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    #[serde(default)]
    pub name: Option<String>,

    #[validate(email(message = "email must be valid"))]
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub role: Option<UserRole>,
}
