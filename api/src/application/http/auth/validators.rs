use campdir_core::domain::user::entities::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(email(message = "email must be valid"))]
    pub email: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,

    /// `user` or `publisher`; admins are provisioned out of band.
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[validate(email(message = "Please provide an email & password"))]
    pub email: String,

    #[validate(length(min = 1, message = "Please provide an email & password"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateDetailsValidator {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    #[serde(default)]
    pub name: Option<String>,

    #[validate(email(message = "email must be valid"))]
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePasswordValidator {
    #[validate(length(min = 1, message = "current password is required"))]
    pub current_password: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub new_password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ForgotPasswordValidator {
    #[validate(email(message = "email must be valid"))]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ResetPasswordValidator {
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}
