use uuid::Uuid;

use crate::domain::{
    auth::{
        ports::{HasherPort, MailerPort, TokenSignerPort},
        value_objects::Identity,
    },
    bootcamp::ports::{BootcampRepository, GeocoderPort},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    course::{
        entities::Course,
        policies::{can_add_course, can_modify_course},
        ports::{CourseRepository, CourseService},
        value_objects::{CreateCourseInput, UpdateCourseInput},
    },
    health::ports::HealthCheckRepository,
    query::{ListQuery, Page},
    review::ports::ReviewRepository,
    storage::ports::{ObjectStoragePort, StoredObjectRepository},
    user::ports::UserRepository,
};

impl<B, C, R, U, SO, OS, H, T, M, G, HC> CourseService
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
    async fn get_courses(
        &self,
        query: ListQuery,
        bootcamp_id: Option<Uuid>,
    ) -> Result<Page<Course>, CoreError> {
        let query = match bootcamp_id {
            Some(id) => query.with_filter("bootcamp_id", id.to_string()),
            None => query,
        };

        self.course_repository.list(query).await
    }

    async fn get_course(&self, course_id: Uuid) -> Result<Option<Course>, CoreError> {
        self.course_repository.get_by_id(course_id).await
    }

    async fn create_course(
        &self,
        identity: Identity,
        bootcamp_id: Uuid,
        input: CreateCourseInput,
    ) -> Result<Course, CoreError> {
        let bootcamp = self
            .bootcamp_repository
            .get_by_id(bootcamp_id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!("No bootcamp exists with id: {bootcamp_id}"))
            })?;

        ensure_policy(
            can_add_course(&identity, &bootcamp),
            "Not authorized to add a course to this bootcamp",
        )?;

        let course = Course::new(input, bootcamp_id, identity.id());
        let course = self.course_repository.create(course).await?;
        tracing::info!(course_id = %course.id, bootcamp_id = %bootcamp_id, "Course created");

        Ok(course)
    }

    async fn update_course(
        &self,
        identity: Identity,
        input: UpdateCourseInput,
    ) -> Result<Course, CoreError> {
        let mut course = self
            .course_repository
            .get_by_id(input.course_id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!("No course found with id: {}", input.course_id))
            })?;

        ensure_policy(
            can_modify_course(&identity, &course),
            "Not authorized to update this course",
        )?;

        course.update(
            input.title,
            input.description,
            input.weeks,
            input.tuition,
            input.minimum_skill,
            input.scholarship_available,
        );

        self.course_repository.update(course).await
    }

    async fn delete_course(&self, identity: Identity, course_id: Uuid) -> Result<(), CoreError> {
        let course = self
            .course_repository
            .get_by_id(course_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("No course found with id: {course_id}")))?;

        ensure_policy(
            can_modify_course(&identity, &course),
            "Not authorized to delete this course",
        )?;

        self.course_repository.delete(course_id).await
    }
}
