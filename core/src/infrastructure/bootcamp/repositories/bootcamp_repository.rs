use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    bootcamp::{entities::Bootcamp, ports::BootcampRepository, value_objects::GeoBounds},
    common::entities::app_errors::CoreError,
    course::entities::Course,
    query::{ListQuery, Page},
};
use crate::entity::{
    bootcamps::{Column as BootcampColumn, Entity as BootcampEntity},
    courses::{Column as CourseColumn, Entity as CourseEntity},
    reviews::{Column as ReviewColumn, Entity as ReviewEntity},
};
use crate::infrastructure::bootcamp::mappers::to_active_model;
use crate::infrastructure::query::fetch_page;

#[derive(Debug, Clone)]
pub struct PostgresBootcampRepository {
    pub db: DatabaseConnection,
}

impl PostgresBootcampRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Batch-load the courses for a set of bootcamps and group them by owner,
    /// so list responses carry the expansion without a query per record.
    async fn attach_courses(&self, bootcamps: &mut [Bootcamp]) -> Result<(), CoreError> {
        let bootcamp_ids: Vec<Uuid> = bootcamps.iter().map(|b| b.id).collect();
        if bootcamp_ids.is_empty() {
            return Ok(());
        }

        let course_models = CourseEntity::find()
            .filter(CourseColumn::BootcampId.is_in(bootcamp_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load bootcamp courses: {e}");
                CoreError::Internal
            })?;

        let mut courses_map: HashMap<Uuid, Vec<Course>> = HashMap::new();
        for model in course_models {
            courses_map
                .entry(model.bootcamp_id)
                .or_default()
                .push(Course::from(model));
        }

        for bootcamp in bootcamps.iter_mut() {
            bootcamp.courses = courses_map.remove(&bootcamp.id).unwrap_or_default();
        }

        Ok(())
    }
}

impl BootcampRepository for PostgresBootcampRepository {
    async fn list(&self, query: ListQuery) -> Result<Page<Bootcamp>, CoreError> {
        let page = fetch_page(&self.db, BootcampEntity::find(), &query).await?;
        let mut page = page.map(Bootcamp::from);

        self.attach_courses(&mut page.items).await?;

        Ok(page)
    }

    async fn get_by_id(&self, bootcamp_id: Uuid) -> Result<Option<Bootcamp>, CoreError> {
        let model = BootcampEntity::find()
            .filter(BootcampColumn::Id.eq(bootcamp_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get bootcamp by id: {e}");
                CoreError::Internal
            })?;

        let Some(model) = model else {
            return Ok(None);
        };

        let mut bootcamps = vec![Bootcamp::from(model)];
        self.attach_courses(&mut bootcamps).await?;

        Ok(bootcamps.pop())
    }

    async fn find_in_bounds(&self, bounds: GeoBounds) -> Result<Vec<Bootcamp>, CoreError> {
        let models = BootcampEntity::find()
            .filter(BootcampColumn::Latitude.between(bounds.min_latitude, bounds.max_latitude))
            .filter(BootcampColumn::Longitude.between(bounds.min_longitude, bounds.max_longitude))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search bootcamps in bounds: {e}");
                CoreError::Internal
            })?;

        Ok(models.iter().map(Bootcamp::from).collect())
    }

    async fn create(&self, bootcamp: Bootcamp) -> Result<Bootcamp, CoreError> {
        let created = BootcampEntity::insert(to_active_model(&bootcamp))
            .exec_with_returning(&self.db)
            .await
            .map(Bootcamp::from)
            .map_err(|e| CoreError::from_db(e, "Failed to create bootcamp"))?;

        Ok(created)
    }

    async fn update(&self, bootcamp: Bootcamp) -> Result<Bootcamp, CoreError> {
        let updated = BootcampEntity::update(to_active_model(&bootcamp))
            .filter(BootcampColumn::Id.eq(bootcamp.id))
            .exec(&self.db)
            .await
            .map(Bootcamp::from)
            .map_err(|e| CoreError::from_db(e, "Failed to update bootcamp"))?;

        Ok(updated)
    }

    async fn delete(&self, bootcamp_id: Uuid) -> Result<(), CoreError> {
        // Dependent rows go first.
        CourseEntity::delete_many()
            .filter(CourseColumn::BootcampId.eq(bootcamp_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete bootcamp courses: {e}");
                CoreError::Internal
            })?;

        ReviewEntity::delete_many()
            .filter(ReviewColumn::BootcampId.eq(bootcamp_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete bootcamp reviews: {e}");
                CoreError::Internal
            })?;

        BootcampEntity::delete_many()
            .filter(BootcampColumn::Id.eq(bootcamp_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete bootcamp: {e}");
                CoreError::Internal
            })?;

        Ok(())
    }
}
