use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    auth::value_objects::Identity,
    common::entities::app_errors::CoreError,
    course::{
        entities::Course,
        value_objects::{CreateCourseInput, UpdateCourseInput},
    },
    query::{ListQuery, Page},
};

#[cfg_attr(test, mockall::automock)]
pub trait CourseService: Send + Sync {
    /// List courses, optionally scoped to one bootcamp (the nested route).
    fn get_courses(
        &self,
        query: ListQuery,
        bootcamp_id: Option<Uuid>,
    ) -> impl Future<Output = Result<Page<Course>, CoreError>> + Send;

    fn get_course(
        &self,
        course_id: Uuid,
    ) -> impl Future<Output = Result<Option<Course>, CoreError>> + Send;

    fn create_course(
        &self,
        identity: Identity,
        bootcamp_id: Uuid,
        input: CreateCourseInput,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn update_course(
        &self,
        identity: Identity,
        input: UpdateCourseInput,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn delete_course(
        &self,
        identity: Identity,
        course_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CourseRepository: Send + Sync {
    fn list(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<Course>, CoreError>> + Send;

    /// Single course with its bootcamp's name/description attached.
    fn get_by_id(
        &self,
        course_id: Uuid,
    ) -> impl Future<Output = Result<Option<Course>, CoreError>> + Send;

    /// Persists the course and refreshes the bootcamp's average cost.
    fn create(&self, course: Course) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn update(&self, course: Course) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn delete(&self, course_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
