use crate::domain::auth::value_objects::Identity;
use crate::domain::bootcamp::entities::Bootcamp;
use crate::domain::user::entities::UserRole;

/// Publishing bootcamps requires the publisher (or admin) role.
pub fn can_create_bootcamp(identity: &Identity) -> bool {
    matches!(identity.role(), UserRole::Publisher | UserRole::Admin)
}

/// Only the owner or an admin may change or remove a bootcamp.
pub fn can_modify_bootcamp(identity: &Identity, bootcamp: &Bootcamp) -> bool {
    bootcamp.user_id == identity.id() || identity.user().is_admin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bootcamp::value_objects::CreateBootcampInput;
    use crate::domain::user::entities::User;
    use uuid::Uuid;

    fn identity(role: UserRole) -> Identity {
        Identity::User(User::new(
            "t".to_string(),
            "t@example.com".to_string(),
            role,
            "hash".to_string(),
        ))
    }

    fn bootcamp(owner: Uuid) -> Bootcamp {
        Bootcamp::new(
            CreateBootcampInput {
                name: "Devworks".to_string(),
                description: "d".to_string(),
                website: None,
                email: None,
                phone: None,
                address: "a".to_string(),
                zipcode: None,
                careers: vec![],
                housing: false,
                job_assistance: false,
                job_guarantee: false,
                accept_gi: false,
            },
            owner,
        )
    }

    #[test]
    fn plain_users_cannot_publish() {
        assert!(!can_create_bootcamp(&identity(UserRole::User)));
        assert!(can_create_bootcamp(&identity(UserRole::Publisher)));
        assert!(can_create_bootcamp(&identity(UserRole::Admin)));
    }

    #[test]
    fn owner_and_admin_can_modify() {
        let owner = identity(UserRole::Publisher);
        let other = identity(UserRole::Publisher);
        let admin = identity(UserRole::Admin);
        let camp = bootcamp(owner.id());

        assert!(can_modify_bootcamp(&owner, &camp));
        assert!(!can_modify_bootcamp(&other, &camp));
        assert!(can_modify_bootcamp(&admin, &camp));
    }
}
