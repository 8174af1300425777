use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{ListQuery, Page},
    storage::{entities::StoredObject, ports::StoredObjectRepository},
};
use crate::entity::stored_objects::{Column as StoredObjectColumn, Entity as StoredObjectEntity};
use crate::infrastructure::query::fetch_page;
use crate::infrastructure::storage::mappers::to_active_model;

#[derive(Debug, Clone)]
pub struct PostgresStoredObjectRepository {
    pub db: DatabaseConnection,
}

impl PostgresStoredObjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl StoredObjectRepository for PostgresStoredObjectRepository {
    async fn create(&self, object: StoredObject) -> Result<StoredObject, CoreError> {
        let created = StoredObjectEntity::insert(to_active_model(&object))
            .exec_with_returning(&self.db)
            .await
            .map(StoredObject::from)
            .map_err(|e| CoreError::from_db(e, "Failed to create stored object"))?;

        Ok(created)
    }

    async fn list(&self, query: ListQuery) -> Result<Page<StoredObject>, CoreError> {
        let page = fetch_page(&self.db, StoredObjectEntity::find(), &query).await?;

        Ok(page.map(StoredObject::from))
    }

    async fn get_by_id(&self, object_id: Uuid) -> Result<Option<StoredObject>, CoreError> {
        let object = StoredObjectEntity::find()
            .filter(StoredObjectColumn::Id.eq(object_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get stored object by id: {e}");
                CoreError::Internal
            })?
            .map(StoredObject::from);

        Ok(object)
    }

    async fn delete(&self, object_id: Uuid) -> Result<(), CoreError> {
        StoredObjectEntity::delete_many()
            .filter(StoredObjectColumn::Id.eq(object_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete stored object: {e}");
                CoreError::Internal
            })?;

        Ok(())
    }
}
