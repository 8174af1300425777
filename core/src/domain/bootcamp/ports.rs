use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    auth::value_objects::Identity,
    bootcamp::{
        entities::Bootcamp,
        value_objects::{
            AttachPhotoInput, CreateBootcampInput, GeoBounds, GeoPoint, RadiusSearchInput,
            UpdateBootcampInput,
        },
    },
    common::entities::app_errors::CoreError,
    query::{ListQuery, Page},
};

#[cfg_attr(test, mockall::automock)]
pub trait BootcampService: Send + Sync {
    fn get_bootcamps(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<Bootcamp>, CoreError>> + Send;

    fn get_bootcamp(
        &self,
        bootcamp_id: Uuid,
    ) -> impl Future<Output = Result<Option<Bootcamp>, CoreError>> + Send;

    fn create_bootcamp(
        &self,
        identity: Identity,
        input: CreateBootcampInput,
    ) -> impl Future<Output = Result<Bootcamp, CoreError>> + Send;

    fn update_bootcamp(
        &self,
        identity: Identity,
        input: UpdateBootcampInput,
    ) -> impl Future<Output = Result<Bootcamp, CoreError>> + Send;

    fn delete_bootcamp(
        &self,
        identity: Identity,
        bootcamp_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_bootcamps_in_radius(
        &self,
        input: RadiusSearchInput,
    ) -> impl Future<Output = Result<Vec<Bootcamp>, CoreError>> + Send;

    fn attach_photo(
        &self,
        identity: Identity,
        input: AttachPhotoInput,
    ) -> impl Future<Output = Result<Bootcamp, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait BootcampRepository: Send + Sync {
    /// List bootcamps through the generic query layer, courses expanded.
    fn list(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<Bootcamp>, CoreError>> + Send;

    fn get_by_id(
        &self,
        bootcamp_id: Uuid,
    ) -> impl Future<Output = Result<Option<Bootcamp>, CoreError>> + Send;

    fn find_in_bounds(
        &self,
        bounds: GeoBounds,
    ) -> impl Future<Output = Result<Vec<Bootcamp>, CoreError>> + Send;

    fn create(
        &self,
        bootcamp: Bootcamp,
    ) -> impl Future<Output = Result<Bootcamp, CoreError>> + Send;

    fn update(
        &self,
        bootcamp: Bootcamp,
    ) -> impl Future<Output = Result<Bootcamp, CoreError>> + Send;

    /// Removes the bootcamp and its dependent courses and reviews.
    fn delete(&self, bootcamp_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Outbound geocoding used by the radius search.
#[cfg_attr(test, mockall::automock)]
pub trait GeocoderPort: Send + Sync {
    fn geocode_zip(
        &self,
        zipcode: String,
    ) -> impl Future<Output = Result<GeoPoint, CoreError>> + Send;
}
