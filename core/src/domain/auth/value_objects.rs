use crate::domain::user::entities::{User, UserRole};
use uuid::Uuid;

/// Authenticated principal attached to a request.
#[derive(Debug, Clone)]
pub enum Identity {
    User(User),
}

impl Identity {
    pub fn id(&self) -> Uuid {
        match self {
            Identity::User(user) => user.id,
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            Identity::User(user) => user.role,
        }
    }

    pub fn user(&self) -> &User {
        match self {
            Identity::User(user) => user,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct UpdateDetailsInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdatePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone)]
pub struct ForgotPasswordInput {
    pub email: String,
    /// Base URL the raw reset token is appended to when composing the mail.
    pub reset_url_base: String,
}

#[derive(Debug, Clone)]
pub struct ResetPasswordInput {
    pub token: String,
    pub password: String,
}

/// Outcome of a credential exchange: the user plus a freshly signed token.
#[derive(Debug, Clone)]
pub struct AuthOutput {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
    pub to: String,
    pub subject: String,
    pub body: String,
}
