use crate::domain::auth::value_objects::Identity;
use crate::domain::storage::entities::StoredObject;

/// Any authenticated identity may upload and browse files; removal is
/// reserved to the uploader or an admin.
pub fn can_delete_file(identity: &Identity, object: &StoredObject) -> bool {
    object.uploaded_by == identity.id() || identity.user().is_admin()
}
