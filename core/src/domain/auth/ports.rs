use std::future::Future;

use crate::domain::{
    auth::{
        entities::JwtClaim,
        value_objects::{
            AuthOutput, ForgotPasswordInput, Identity, LoginInput, Mail, RegisterInput,
            ResetPasswordInput, UpdateDetailsInput, UpdatePasswordInput,
        },
    },
    common::entities::app_errors::CoreError,
    user::entities::User,
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn register(
        &self,
        input: RegisterInput,
    ) -> impl Future<Output = Result<AuthOutput, CoreError>> + Send;

    fn login(&self, input: LoginInput)
    -> impl Future<Output = Result<AuthOutput, CoreError>> + Send;

    /// Verify a bearer token and load the user it names.
    fn authenticate(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;

    fn update_details(
        &self,
        identity: Identity,
        input: UpdateDetailsInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_password(
        &self,
        identity: Identity,
        input: UpdatePasswordInput,
    ) -> impl Future<Output = Result<AuthOutput, CoreError>> + Send;

    fn forgot_password(
        &self,
        input: ForgotPasswordInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn reset_password(
        &self,
        input: ResetPasswordInput,
    ) -> impl Future<Output = Result<AuthOutput, CoreError>> + Send;
}

/// Password hashing behind a port so the algorithm stays swappable.
#[cfg_attr(test, mockall::automock)]
pub trait HasherPort: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, CoreError>;

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait TokenSignerPort: Send + Sync {
    fn sign(&self, user: &User) -> Result<String, CoreError>;

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait MailerPort: Send + Sync {
    fn send(&self, mail: Mail) -> impl Future<Output = Result<(), CoreError>> + Send;
}
