use crate::domain::auth::value_objects::Identity;

/// User administration is reserved to admins.
pub fn can_manage_users(identity: &Identity) -> bool {
    identity.user().is_admin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::entities::{User, UserRole};

    fn identity(role: UserRole) -> Identity {
        Identity::User(User::new(
            "t".to_string(),
            "t@example.com".to_string(),
            role,
            "hash".to_string(),
        ))
    }

    #[test]
    fn only_admin_manages_users() {
        assert!(can_manage_users(&identity(UserRole::Admin)));
        assert!(!can_manage_users(&identity(UserRole::Publisher)));
        assert!(!can_manage_users(&identity(UserRole::User)));
    }
}
