use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};

use crate::domain::{
    auth::{
        ports::{AuthService, HasherPort, MailerPort, TokenSignerPort},
        value_objects::{
            AuthOutput, ForgotPasswordInput, Identity, LoginInput, Mail, RegisterInput,
            ResetPasswordInput, UpdateDetailsInput, UpdatePasswordInput,
        },
    },
    bootcamp::ports::{BootcampRepository, GeocoderPort},
    common::{
        entities::app_errors::CoreError, generate_random_string, services::Service,
    },
    course::ports::CourseRepository,
    health::ports::HealthCheckRepository,
    review::ports::ReviewRepository,
    storage::ports::{ObjectStoragePort, StoredObjectRepository},
    user::{
        entities::{User, UserRole},
        ports::UserRepository,
    },
};

const RESET_TOKEN_TTL_MINUTES: i64 = 10;

/// Reset tokens are stored hashed; only the mail carries the raw value.
pub fn hash_reset_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

impl<B, C, R, U, SO, OS, H, T, M, G, HC> AuthService for Service<B, C, R, U, SO, OS, H, T, M, G, HC>
where
    B: BootcampRepository,
    C: CourseRepository,
    R: ReviewRepository,
    U: UserRepository,
    SO: StoredObjectRepository,
    OS: ObjectStoragePort,
    H: HasherPort,
    T: TokenSignerPort,
    M: MailerPort,
    G: GeocoderPort,
    HC: HealthCheckRepository,
{
    async fn register(&self, input: RegisterInput) -> Result<AuthOutput, CoreError> {
        if input.role == UserRole::Admin {
            return Err(CoreError::Validation(
                "Cannot self-register an admin account".to_string(),
            ));
        }

        let password_hash = self.hasher.hash_password(&input.password)?;
        let user = User::new(input.name, input.email, input.role, password_hash);
        let user = self.user_repository.create(user).await?;

        let token = self.token_signer.sign(&user)?;
        tracing::info!(user_id = %user.id, "User registered");

        Ok(AuthOutput { user, token })
    }

    async fn login(&self, input: LoginInput) -> Result<AuthOutput, CoreError> {
        let user = self
            .user_repository
            .get_by_email(input.email)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(&input.password, &user.password_hash)?;
        if !matches {
            return Err(CoreError::InvalidCredentials);
        }

        let token = self.token_signer.sign(&user)?;

        Ok(AuthOutput { user, token })
    }

    async fn authenticate(&self, token: String) -> Result<Identity, CoreError> {
        let claims = self.token_signer.verify(&token)?;

        let user = self
            .user_repository
            .get_by_id(claims.sub)
            .await?
            .ok_or_else(|| {
                CoreError::Unauthorized("Not authorized to access this route".to_string())
            })?;

        Ok(Identity::User(user))
    }

    async fn update_details(
        &self,
        identity: Identity,
        input: UpdateDetailsInput,
    ) -> Result<User, CoreError> {
        let mut user = self
            .user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!("No user found with id: {}", identity.id()))
            })?;

        user.update_details(input.name, input.email);

        self.user_repository.update(user).await
    }

    async fn update_password(
        &self,
        identity: Identity,
        input: UpdatePasswordInput,
    ) -> Result<AuthOutput, CoreError> {
        let mut user = self
            .user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!("No user found with id: {}", identity.id()))
            })?;

        let matches = self
            .hasher
            .verify_password(&input.current_password, &user.password_hash)?;
        if !matches {
            return Err(CoreError::InvalidCredentials);
        }

        let password_hash = self.hasher.hash_password(&input.new_password)?;
        user.set_password(password_hash);
        let user = self.user_repository.update(user).await?;

        let token = self.token_signer.sign(&user)?;

        Ok(AuthOutput { user, token })
    }

    async fn forgot_password(&self, input: ForgotPasswordInput) -> Result<(), CoreError> {
        let mut user = self
            .user_repository
            .get_by_email(input.email.clone())
            .await?
            .ok_or_else(|| CoreError::NotFound("No user found with that email".to_string()))?;

        let raw_token = generate_random_string(32);
        let expires_at = Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES);
        user.set_reset_token(hash_reset_token(&raw_token), expires_at);
        let user = self.user_repository.update(user).await?;

        let reset_url = format!("{}/{raw_token}", input.reset_url_base.trim_end_matches('/'));
        let mail = Mail {
            to: user.email.clone(),
            subject: "Password reset token".to_string(),
            body: format!(
                "You are receiving this email to reset your Campdir password. \
                 Make a PUT request to: {reset_url}"
            ),
        };

        if let Err(e) = self.mailer.send(mail).await {
            tracing::error!("Failed to send password reset mail: {e}");
            // Roll back the token so a failed delivery cannot be replayed.
            let mut user = user;
            user.reset_password_token = None;
            user.reset_password_expire = None;
            self.user_repository.update(user).await?;
            return Err(CoreError::MailDelivery);
        }

        Ok(())
    }

    async fn reset_password(&self, input: ResetPasswordInput) -> Result<AuthOutput, CoreError> {
        let token_hash = hash_reset_token(&input.token);

        let mut user = self
            .user_repository
            .get_by_reset_token(token_hash, Utc::now())
            .await?
            .ok_or_else(|| CoreError::Validation("Invalid token".to_string()))?;

        let password_hash = self.hasher.hash_password(&input.password)?;
        user.set_password(password_hash);
        let user = self.user_repository.update(user).await?;

        let token = self.token_signer.sign(&user)?;
        tracing::info!(user_id = %user.id, "Password reset completed");

        Ok(AuthOutput { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_token_hash_is_stable_hex() {
        let first = hash_reset_token("abc123");
        let second = hash_reset_token("abc123");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert_ne!(first, hash_reset_token("abc124"));
    }
}
