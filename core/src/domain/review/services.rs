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
    review::{
        entities::Review,
        policies::{can_add_review, can_modify_review},
        ports::{ReviewRepository, ReviewService},
        value_objects::{CreateReviewInput, UpdateReviewInput},
    },
    storage::ports::{ObjectStoragePort, StoredObjectRepository},
    user::ports::UserRepository,
};

impl<B, C, R, U, SO, OS, H, T, M, G, HC> ReviewService
    for Service<B, C, R, U, SO, OS, H, T, M, G, HC>
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
    async fn get_reviews(
        &self,
        query: ListQuery,
        bootcamp_id: Option<Uuid>,
    ) -> Result<Page<Review>, CoreError> {
        let query = match bootcamp_id {
            Some(id) => query.with_filter("bootcamp_id", id.to_string()),
            None => query,
        };

        self.review_repository.list(query).await
    }

    async fn get_review(&self, review_id: Uuid) -> Result<Option<Review>, CoreError> {
        self.review_repository.get_by_id(review_id).await
    }

    async fn create_review(
        &self,
        identity: Identity,
        bootcamp_id: Uuid,
        input: CreateReviewInput,
    ) -> Result<Review, CoreError> {
        ensure_policy(
            can_add_review(&identity),
            "Not authorized to add a review",
        )?;

        self.bootcamp_repository
            .get_by_id(bootcamp_id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!("No bootcamp exists with id: {bootcamp_id}"))
            })?;

        let review = Review::new(input, bootcamp_id, identity.id());
        let review = self.review_repository.create(review).await?;
        tracing::info!(review_id = %review.id, bootcamp_id = %bootcamp_id, "Review created");

        Ok(review)
    }

    async fn update_review(
        &self,
        identity: Identity,
        input: UpdateReviewInput,
    ) -> Result<Review, CoreError> {
        let mut review = self
            .review_repository
            .get_by_id(input.review_id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!("No review found with id: {}", input.review_id))
            })?;

        ensure_policy(
            can_modify_review(&identity, &review),
            "Not authorized to update this review",
        )?;

        review.update(input.title, input.text, input.rating);

        self.review_repository.update(review).await
    }

    async fn delete_review(&self, identity: Identity, review_id: Uuid) -> Result<(), CoreError> {
        let review = self
            .review_repository
            .get_by_id(review_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("No review found with id: {review_id}")))?;

        ensure_policy(
            can_modify_review(&identity, &review),
            "Not authorized to delete this review",
        )?;

        self.review_repository.delete(review_id).await
    }
}
