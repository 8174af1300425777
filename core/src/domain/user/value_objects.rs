use uuid::Uuid;

use crate::domain::user::entities::UserRole;

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct UpdateUserInput {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}
