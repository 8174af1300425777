use crate::domain::auth::value_objects::Identity;
use crate::domain::bootcamp::entities::Bootcamp;
use crate::domain::course::entities::Course;

/// Courses belong to a bootcamp; only its owner or an admin may add one.
pub fn can_add_course(identity: &Identity, bootcamp: &Bootcamp) -> bool {
    bootcamp.user_id == identity.id() || identity.user().is_admin()
}

pub fn can_modify_course(identity: &Identity, course: &Course) -> bool {
    course.user_id == identity.id() || identity.user().is_admin()
}
