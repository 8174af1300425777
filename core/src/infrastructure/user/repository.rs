use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{ListQuery, Page},
    user::{entities::User, ports::UserRepository},
};
use crate::entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::infrastructure::query::fetch_page;
use crate::infrastructure::user::mappers::to_active_model;

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn list(&self, query: ListQuery) -> Result<Page<User>, CoreError> {
        let page = fetch_page(&self.db, UserEntity::find(), &query).await?;

        Ok(page.map(User::from))
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Id.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {e}");
                CoreError::Internal
            })?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {e}");
                CoreError::Internal
            })?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_reset_token(
        &self,
        token_hash: String,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::ResetPasswordToken.eq(token_hash))
            .filter(UserColumn::ResetPasswordExpire.gt(now.fixed_offset()))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by reset token: {e}");
                CoreError::Internal
            })?
            .map(User::from);

        Ok(user)
    }

    async fn create(&self, user: User) -> Result<User, CoreError> {
        let created = UserEntity::insert(to_active_model(&user))
            .exec_with_returning(&self.db)
            .await
            .map(User::from)
            .map_err(|e| CoreError::from_db(e, "Failed to create user"))?;

        Ok(created)
    }

    async fn update(&self, user: User) -> Result<User, CoreError> {
        let updated = UserEntity::update(to_active_model(&user))
            .filter(UserColumn::Id.eq(user.id))
            .exec(&self.db)
            .await
            .map(User::from)
            .map_err(|e| CoreError::from_db(e, "Failed to update user"))?;

        Ok(updated)
    }

    async fn delete(&self, user_id: Uuid) -> Result<(), CoreError> {
        UserEntity::delete_many()
            .filter(UserColumn::Id.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete user: {e}");
                CoreError::Internal
            })?;

        Ok(())
    }
}
