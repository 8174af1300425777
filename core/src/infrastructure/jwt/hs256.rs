use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::error;

use crate::domain::{
    auth::{entities::JwtClaim, ports::TokenSignerPort},
    common::{AuthConfig, entities::app_errors::CoreError},
};
use crate::domain::user::entities::User;

#[derive(Clone)]
pub struct Hs256TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in_secs: u64,
}

impl Hs256TokenSigner {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            expires_in_secs: config.jwt_expires_in_secs,
        }
    }
}

impl TokenSignerPort for Hs256TokenSigner {
    fn sign(&self, user: &User) -> Result<String, CoreError> {
        let now = Utc::now().timestamp();
        let claims = JwtClaim {
            sub: user.id,
            role: user.role,
            iat: now,
            exp: now + self.expires_in_secs as i64,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign access token: {e}");
            CoreError::Internal
        })
    }

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        let data = decode::<JwtClaim>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| {
                CoreError::Unauthorized("Not authorized to access this route".to_string())
            })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::entities::UserRole;

    fn signer() -> Hs256TokenSigner {
        Hs256TokenSigner::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_expires_in_secs: 3600,
        })
    }

    fn user() -> User {
        User::new(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            UserRole::Publisher,
            "hash".to_string(),
        )
    }

    #[test]
    fn sign_and_verify_round_trip() {
        let signer = signer();
        let user = user();
        let token = signer.sign(&user).unwrap();
        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.role, UserRole::Publisher);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let signer = signer();
        let token = signer.sign(&user()).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(signer.verify(&tampered).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = signer().sign(&user()).unwrap();
        let other = Hs256TokenSigner::new(&AuthConfig {
            jwt_secret: "other-secret".to_string(),
            jwt_expires_in_secs: 3600,
        });
        assert!(other.verify(&token).is_err());
    }
}
