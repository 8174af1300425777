use uuid::Uuid;

use crate::domain::{
    auth::{
        ports::{HasherPort, MailerPort, TokenSignerPort},
        value_objects::Identity,
    },
    bootcamp::ports::{BootcampRepository, GeocoderPort},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    course::ports::CourseRepository,
    health::ports::HealthCheckRepository,
    query::{ListQuery, Page},
    review::ports::ReviewRepository,
    storage::ports::{ObjectStoragePort, StoredObjectRepository},
    user::{
        entities::User,
        policies::can_manage_users,
        ports::{UserRepository, UserService},
        value_objects::{CreateUserInput, UpdateUserInput},
    },
};

impl<B, C, R, U, SO, OS, H, T, M, G, HC> UserService for Service<B, C, R, U, SO, OS, H, T, M, G, HC>
where
    B: BootcampRepository,
    C: CourseRepository,
    R: ReviewRepository,
    U: UserRepository,
    SO: StoredObjectRepository,
    OS: ObjectStoragePort,
    H: HasherPort,
    T: TokenSignerPort,
    M: MailerPort,
    G: GeocoderPort,
    HC: HealthCheckRepository,
{
    async fn get_users(&self, identity: Identity, query: ListQuery) -> Result<Page<User>, CoreError> {
        ensure_policy(can_manage_users(&identity), "insufficient permissions")?;

        self.user_repository.list(query).await
    }

    async fn get_user(&self, identity: Identity, user_id: Uuid) -> Result<Option<User>, CoreError> {
        ensure_policy(can_manage_users(&identity), "insufficient permissions")?;

        self.user_repository.get_by_id(user_id).await
    }

    async fn create_user(
        &self,
        identity: Identity,
        input: CreateUserInput,
    ) -> Result<User, CoreError> {
        ensure_policy(can_manage_users(&identity), "insufficient permissions")?;

        let password_hash = self.hasher.hash_password(&input.password)?;
        let user = User::new(input.name, input.email, input.role, password_hash);

        self.user_repository.create(user).await
    }

    async fn update_user(
        &self,
        identity: Identity,
        input: UpdateUserInput,
    ) -> Result<User, CoreError> {
        ensure_policy(can_manage_users(&identity), "insufficient permissions")?;

        let mut user = self
            .user_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!("No user found with id: {}", input.user_id))
            })?;

        user.update_details(input.name, input.email);
        if let Some(role) = input.role {
            user.role = role;
        }

        self.user_repository.update(user).await
    }

    async fn delete_user(&self, identity: Identity, user_id: Uuid) -> Result<(), CoreError> {
        ensure_policy(can_manage_users(&identity), "insufficient permissions")?;

        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("No user found with id: {user_id}")))?;

        self.user_repository.delete(user_id).await
    }
}
