use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::storage::entities::StoredObject;
use crate::entity::stored_objects::{ActiveModel as StoredObjectActiveModel, Model as StoredObjectModel};

impl From<StoredObjectModel> for StoredObject {
    fn from(model: StoredObjectModel) -> Self {
        StoredObject::from(&model)
    }
}

impl From<&StoredObjectModel> for StoredObject {
    fn from(model: &StoredObjectModel) -> Self {
        StoredObject {
            id: model.id,
            bucket: model.bucket.clone(),
            object_key: model.object_key.clone(),
            original_name: model.original_name.clone(),
            mime_type: model.mime_type.clone(),
            size_bytes: model.size_bytes,
            checksum_sha256: model.checksum_sha256.clone(),
            metadata: model.metadata.clone(),
            uploaded_by: model.uploaded_by,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

pub fn to_active_model(object: &StoredObject) -> StoredObjectActiveModel {
    StoredObjectActiveModel {
        id: Set(object.id),
        bucket: Set(object.bucket.clone()),
        object_key: Set(object.object_key.clone()),
        original_name: Set(object.original_name.clone()),
        mime_type: Set(object.mime_type.clone()),
        size_bytes: Set(object.size_bytes),
        checksum_sha256: Set(object.checksum_sha256.clone()),
        metadata: Set(object.metadata.clone()),
        uploaded_by: Set(object.uploaded_by),
        created_at: Set(object.created_at.fixed_offset()),
        updated_at: Set(object.updated_at.fixed_offset()),
    }
}
