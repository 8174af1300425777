use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::entities::UserRole;

/// Claims carried by a signed access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}
