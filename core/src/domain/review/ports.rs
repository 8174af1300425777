use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    auth::value_objects::Identity,
    common::entities::app_errors::CoreError,
    query::{ListQuery, Page},
    review::{
        entities::Review,
        value_objects::{CreateReviewInput, UpdateReviewInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ReviewService: Send + Sync {
    fn get_reviews(
        &self,
        query: ListQuery,
        bootcamp_id: Option<Uuid>,
    ) -> impl Future<Output = Result<Page<Review>, CoreError>> + Send;

    fn get_review(
        &self,
        review_id: Uuid,
    ) -> impl Future<Output = Result<Option<Review>, CoreError>> + Send;

    fn create_review(
        &self,
        identity: Identity,
        bootcamp_id: Uuid,
        input: CreateReviewInput,
    ) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn update_review(
        &self,
        identity: Identity,
        input: UpdateReviewInput,
    ) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn delete_review(
        &self,
        identity: Identity,
        review_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ReviewRepository: Send + Sync {
    fn list(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<Review>, CoreError>> + Send;

    fn get_by_id(
        &self,
        review_id: Uuid,
    ) -> impl Future<Output = Result<Option<Review>, CoreError>> + Send;

    /// Persists the review and refreshes the bootcamp's average rating. The
    /// one-review-per-user constraint surfaces as a duplicate error.
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn update(&self, review: Review) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn delete(&self, review_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
