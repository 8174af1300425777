use crate::domain::auth::value_objects::Identity;
use crate::domain::review::entities::Review;
use crate::domain::user::entities::UserRole;

/// Publishers review their own bootcamps in other ways; only plain users (and
/// admins) may leave reviews.
pub fn can_add_review(identity: &Identity) -> bool {
    matches!(identity.role(), UserRole::User | UserRole::Admin)
}

pub fn can_modify_review(identity: &Identity, review: &Review) -> bool {
    review.user_id == identity.id() || identity.user().is_admin()
}
