use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBootcampValidator {
    #[validate(length(min = 1, max = 50, message = "name is required (max 50 characters)"))]
    pub name: String,

    #[validate(length(min = 1, max = 500, message = "description is required (max 500 characters)"))]
    pub description: String,

    #[serde(default)]
    pub website: Option<String>,

    #[validate(email(message = "email must be valid"))]
    #[serde(default)]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "phone cannot be longer than 20 characters"))]
    #[serde(default)]
    pub phone: Option<String>,

    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,

    #[serde(default)]
    pub zipcode: Option<String>,

    #[serde(default)]
    pub careers: Vec<String>,

    #[serde(default)]
    pub housing: bool,

    #[serde(default)]
    pub job_assistance: bool,

    #[serde(default)]
    pub job_guarantee: bool,

    #[serde(default)]
    pub accept_gi: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBootcampValidator {
    #[validate(length(min = 1, max = 50, message = "name cannot be empty (max 50 characters)"))]
    #[serde(default)]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 500, message = "description cannot be empty (max 500 characters)"))]
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[validate(email(message = "email must be valid"))]
    #[serde(default)]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "phone cannot be longer than 20 characters"))]
    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub careers: Option<Vec<String>>,

    #[serde(default)]
    pub housing: Option<bool>,

    #[serde(default)]
    pub job_assistance: Option<bool>,

    #[serde(default)]
    pub job_guarantee: Option<bool>,

    #[serde(default)]
    pub accept_gi: Option<bool>,
}
