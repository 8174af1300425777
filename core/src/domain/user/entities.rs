use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Publisher,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Publisher => "publisher",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            "publisher" => Ok(UserRole::Publisher),
            "admin" => Ok(UserRole::Admin),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip)]
    pub password_hash: String,
    #[serde(skip)]
    pub reset_password_token: Option<String>,
    #[serde(skip)]
    pub reset_password_expire: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, role: UserRole, password_hash: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            email,
            role,
            password_hash,
            reset_password_token: None,
            reset_password_expire: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_details(&mut self, name: Option<String>, email: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        self.updated_at = Utc::now();
    }

    /// Setting a new password invalidates any outstanding reset token.
    pub fn set_password(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.reset_password_token = None;
        self.reset_password_expire = None;
        self.updated_at = Utc::now();
    }

    pub fn set_reset_token(&mut self, token_hash: String, expires_at: DateTime<Utc>) {
        self.reset_password_token = Some(token_hash);
        self.reset_password_expire = Some(expires_at);
        self.updated_at = Utc::now();
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User::new(
            "John Doe".to_string(),
            "john@example.com".to_string(),
            UserRole::Publisher,
            "$argon2id$stub".to_string(),
        );
        let value = serde_json::to_value(&user).unwrap();
        let map = value.as_object().unwrap();
        assert!(!map.contains_key("password_hash"));
        assert!(!map.contains_key("reset_password_token"));
        assert_eq!(map["role"], "publisher");
    }

    #[test]
    fn set_password_clears_reset_state() {
        let mut user = User::new(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            UserRole::User,
            "old".to_string(),
        );
        user.set_reset_token("hash".to_string(), Utc::now());
        user.set_password("new".to_string());
        assert!(user.reset_password_token.is_none());
        assert!(user.reset_password_expire.is_none());
        assert_eq!(user.password_hash, "new");
    }

    #[test]
    fn role_round_trips_through_str() {
        for role in [UserRole::User, UserRole::Publisher, UserRole::Admin] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("root".parse::<UserRole>().is_err());
    }
}
