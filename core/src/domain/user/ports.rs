use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    auth::value_objects::Identity,
    common::entities::app_errors::CoreError,
    query::{ListQuery, Page},
    user::{
        entities::User,
        value_objects::{CreateUserInput, UpdateUserInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn get_users(
        &self,
        identity: Identity,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<User>, CoreError>> + Send;

    fn get_user(
        &self,
        identity: Identity,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn create_user(
        &self,
        identity: Identity,
        input: CreateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(
        &self,
        identity: Identity,
        input: UpdateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete_user(
        &self,
        identity: Identity,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn list(&self, query: ListQuery)
    -> impl Future<Output = Result<Page<User>, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Look up a user by reset-token hash, ignoring expired tokens.
    fn get_by_reset_token(
        &self,
        token_hash: String,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn create(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete(&self, user_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
