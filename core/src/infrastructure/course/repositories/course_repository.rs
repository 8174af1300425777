use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    course::{
        entities::{Course, CourseBootcampSummary, average_cost},
        ports::CourseRepository,
    },
    query::{ListQuery, Page},
};
use crate::entity::{
    bootcamps::{Column as BootcampColumn, Entity as BootcampEntity},
    courses::{Column as CourseColumn, Entity as CourseEntity},
};
use crate::infrastructure::course::mappers::to_active_model;
use crate::infrastructure::query::fetch_page;

#[derive(Debug, Clone)]
pub struct PostgresCourseRepository {
    pub db: DatabaseConnection,
}

impl PostgresCourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Refresh the denormalized average cost on the owning bootcamp.
    async fn refresh_average_cost(&self, bootcamp_id: Uuid) -> Result<(), CoreError> {
        let tuitions: Vec<i32> = CourseEntity::find()
            .filter(CourseColumn::BootcampId.eq(bootcamp_id))
            .select_only()
            .column(CourseColumn::Tuition)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load tuitions for average cost: {e}");
                CoreError::Internal
            })?;

        let average = average_cost(&tuitions);

        BootcampEntity::update_many()
            .col_expr(BootcampColumn::AverageCost, Expr::value(average))
            .filter(BootcampColumn::Id.eq(bootcamp_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update bootcamp average cost: {e}");
                CoreError::Internal
            })?;

        Ok(())
    }
}

impl CourseRepository for PostgresCourseRepository {
    async fn list(&self, query: ListQuery) -> Result<Page<Course>, CoreError> {
        let page = fetch_page(&self.db, CourseEntity::find(), &query).await?;

        Ok(page.map(Course::from))
    }

    async fn get_by_id(&self, course_id: Uuid) -> Result<Option<Course>, CoreError> {
        let model = CourseEntity::find()
            .filter(CourseColumn::Id.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get course by id: {e}");
                CoreError::Internal
            })?;

        let Some(model) = model else {
            return Ok(None);
        };

        let mut course = Course::from(&model);

        // Attach the owning bootcamp's name and description.
        let bootcamp = BootcampEntity::find()
            .filter(BootcampColumn::Id.eq(model.bootcamp_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load course bootcamp: {e}");
                CoreError::Internal
            })?;
        course.bootcamp = bootcamp.map(|b| CourseBootcampSummary {
            id: b.id,
            name: b.name,
            description: b.description,
        });

        Ok(Some(course))
    }

    async fn create(&self, course: Course) -> Result<Course, CoreError> {
        let created = CourseEntity::insert(to_active_model(&course))
            .exec_with_returning(&self.db)
            .await
            .map(Course::from)
            .map_err(|e| CoreError::from_db(e, "Failed to create course"))?;

        self.refresh_average_cost(created.bootcamp_id).await?;

        Ok(created)
    }

    async fn update(&self, course: Course) -> Result<Course, CoreError> {
        let updated = CourseEntity::update(to_active_model(&course))
            .filter(CourseColumn::Id.eq(course.id))
            .exec(&self.db)
            .await
            .map(Course::from)
            .map_err(|e| CoreError::from_db(e, "Failed to update course"))?;

        self.refresh_average_cost(updated.bootcamp_id).await?;

        Ok(updated)
    }

    async fn delete(&self, course_id: Uuid) -> Result<(), CoreError> {
        let course = CourseEntity::find()
            .filter(CourseColumn::Id.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get course before delete: {e}");
                CoreError::Internal
            })?
            .ok_or_else(|| CoreError::NotFound(format!("No course found with id: {course_id}")))?;

        CourseEntity::delete_many()
            .filter(CourseColumn::Id.eq(course_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete course: {e}");
                CoreError::Internal
            })?;

        self.refresh_average_cost(course.bootcamp_id).await?;

        Ok(())
    }
}
