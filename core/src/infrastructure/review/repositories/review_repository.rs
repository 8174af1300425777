use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{ListQuery, Page},
    review::{
        entities::{Review, average_rating},
        ports::ReviewRepository,
    },
};
use crate::entity::{
    bootcamps::{Column as BootcampColumn, Entity as BootcampEntity},
    reviews::{Column as ReviewColumn, Entity as ReviewEntity},
};
use crate::infrastructure::query::fetch_page;
use crate::infrastructure::review::mappers::to_active_model;

#[derive(Debug, Clone)]
pub struct PostgresReviewRepository {
    pub db: DatabaseConnection,
}

impl PostgresReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Refresh the denormalized average rating on the reviewed bootcamp.
    async fn refresh_average_rating(&self, bootcamp_id: Uuid) -> Result<(), CoreError> {
        let ratings: Vec<i32> = ReviewEntity::find()
            .filter(ReviewColumn::BootcampId.eq(bootcamp_id))
            .select_only()
            .column(ReviewColumn::Rating)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load ratings for average rating: {e}");
                CoreError::Internal
            })?;

        let average = average_rating(&ratings);

        BootcampEntity::update_many()
            .col_expr(BootcampColumn::AverageRating, Expr::value(average))
            .filter(BootcampColumn::Id.eq(bootcamp_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update bootcamp average rating: {e}");
                CoreError::Internal
            })?;

        Ok(())
    }
}

impl ReviewRepository for PostgresReviewRepository {
    async fn list(&self, query: ListQuery) -> Result<Page<Review>, CoreError> {
        let page = fetch_page(&self.db, ReviewEntity::find(), &query).await?;

        Ok(page.map(Review::from))
    }

    async fn get_by_id(&self, review_id: Uuid) -> Result<Option<Review>, CoreError> {
        let review = ReviewEntity::find()
            .filter(ReviewColumn::Id.eq(review_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get review by id: {e}");
                CoreError::Internal
            })?
            .map(Review::from);

        Ok(review)
    }

    async fn create(&self, review: Review) -> Result<Review, CoreError> {
        let created = ReviewEntity::insert(to_active_model(&review))
            .exec_with_returning(&self.db)
            .await
            .map(Review::from)
            .map_err(|e| CoreError::from_db(e, "Failed to create review"))?;

        self.refresh_average_rating(created.bootcamp_id).await?;

        Ok(created)
    }

    async fn update(&self, review: Review) -> Result<Review, CoreError> {
        let updated = ReviewEntity::update(to_active_model(&review))
            .filter(ReviewColumn::Id.eq(review.id))
            .exec(&self.db)
            .await
            .map(Review::from)
            .map_err(|e| CoreError::from_db(e, "Failed to update review"))?;

        self.refresh_average_rating(updated.bootcamp_id).await?;

        Ok(updated)
    }

    async fn delete(&self, review_id: Uuid) -> Result<(), CoreError> {
        let review = ReviewEntity::find()
            .filter(ReviewColumn::Id.eq(review_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get review before delete: {e}");
                CoreError::Internal
            })?
            .ok_or_else(|| CoreError::NotFound(format!("No review found with id: {review_id}")))?;

        ReviewEntity::delete_many()
            .filter(ReviewColumn::Id.eq(review_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete review: {e}");
                CoreError::Internal
            })?;

        self.refresh_average_rating(review.bootcamp_id).await?;

        Ok(())
    }
}
