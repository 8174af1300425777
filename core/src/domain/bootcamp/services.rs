use uuid::Uuid;

use crate::domain::{
    auth::{
        ports::{HasherPort, MailerPort, TokenSignerPort},
        value_objects::Identity,
    },
    bootcamp::{
        entities::Bootcamp,
        helpers::{bounding_box, haversine_miles},
        policies::{can_create_bootcamp, can_modify_bootcamp},
        ports::{BootcampRepository, BootcampService, GeocoderPort},
        value_objects::{
            AttachPhotoInput, CreateBootcampInput, RadiusSearchInput, UpdateBootcampInput,
        },
    },
    common::{
        entities::app_errors::CoreError, generate_random_string, policies::ensure_policy,
        services::Service,
    },
    course::ports::CourseRepository,
    health::ports::HealthCheckRepository,
    query::{ListQuery, Page},
    review::ports::ReviewRepository,
    storage::ports::{ObjectStoragePort, StoredObjectRepository},
    user::ports::UserRepository,
};

const PHOTO_MAX_BYTES: usize = 5_242_880;

impl<B, C, R, U, SO, OS, H, T, M, G, HC> BootcampService
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
    async fn get_bootcamps(&self, query: ListQuery) -> Result<Page<Bootcamp>, CoreError> {
        self.bootcamp_repository.list(query).await
    }

    async fn get_bootcamp(&self, bootcamp_id: Uuid) -> Result<Option<Bootcamp>, CoreError> {
        self.bootcamp_repository.get_by_id(bootcamp_id).await
    }

    async fn create_bootcamp(
        &self,
        identity: Identity,
        input: CreateBootcampInput,
    ) -> Result<Bootcamp, CoreError> {
        ensure_policy(
            can_create_bootcamp(&identity),
            "insufficient permissions to publish a bootcamp",
        )?;

        let mut bootcamp = Bootcamp::new(input, identity.id());

        // Geocode the zipcode when one was given; a geocoder outage should not
        // block publication, the location just stays unset.
        if let Some(zipcode) = bootcamp.zipcode.clone() {
            match self.geocoder.geocode_zip(zipcode).await {
                Ok(point) => bootcamp.set_location(point.latitude, point.longitude, None, None),
                Err(e) => tracing::warn!("Geocoding failed for new bootcamp: {e}"),
            }
        }

        let bootcamp = self.bootcamp_repository.create(bootcamp).await?;
        tracing::info!(bootcamp_id = %bootcamp.id, "Bootcamp created");

        Ok(bootcamp)
    }

    async fn update_bootcamp(
        &self,
        identity: Identity,
        input: UpdateBootcampInput,
    ) -> Result<Bootcamp, CoreError> {
        let mut bootcamp = self
            .bootcamp_repository
            .get_by_id(input.bootcamp_id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!(
                    "Bootcamp not found with id of: {}",
                    input.bootcamp_id
                ))
            })?;

        ensure_policy(
            can_modify_bootcamp(&identity, &bootcamp),
            "Not authorized to update this bootcamp",
        )?;

        bootcamp.update(
            input.name,
            input.description,
            input.website,
            input.phone,
            input.email,
            input.address,
            input.careers,
            input.housing,
            input.job_assistance,
            input.job_guarantee,
            input.accept_gi,
        );

        self.bootcamp_repository.update(bootcamp).await
    }

    async fn delete_bootcamp(&self, identity: Identity, bootcamp_id: Uuid) -> Result<(), CoreError> {
        let bootcamp = self
            .bootcamp_repository
            .get_by_id(bootcamp_id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!("Bootcamp not found with id of: {bootcamp_id}"))
            })?;

        ensure_policy(
            can_modify_bootcamp(&identity, &bootcamp),
            "Not authorized to delete this bootcamp",
        )?;

        self.bootcamp_repository.delete(bootcamp_id).await?;
        tracing::info!(bootcamp_id = %bootcamp_id, "Bootcamp deleted");

        Ok(())
    }

    async fn get_bootcamps_in_radius(
        &self,
        input: RadiusSearchInput,
    ) -> Result<Vec<Bootcamp>, CoreError> {
        let center = self.geocoder.geocode_zip(input.zipcode).await?;

        // Coarse bounding-box fetch, then the exact great-circle check.
        let bounds = bounding_box(center.latitude, center.longitude, input.distance_miles);
        let candidates = self.bootcamp_repository.find_in_bounds(bounds).await?;

        let bootcamps = candidates
            .into_iter()
            .filter(|b| match (b.latitude, b.longitude) {
                (Some(lat), Some(lng)) => {
                    haversine_miles(center.latitude, center.longitude, lat, lng)
                        <= input.distance_miles
                }
                _ => false,
            })
            .collect();

        Ok(bootcamps)
    }

    async fn attach_photo(
        &self,
        identity: Identity,
        input: AttachPhotoInput,
    ) -> Result<Bootcamp, CoreError> {
        let mut bootcamp = self
            .bootcamp_repository
            .get_by_id(input.bootcamp_id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!(
                    "Bootcamp not found with id of: {}",
                    input.bootcamp_id
                ))
            })?;

        ensure_policy(
            can_modify_bootcamp(&identity, &bootcamp),
            "Not authorized to update this bootcamp",
        )?;

        if !input.mime_type.starts_with("image/") {
            return Err(CoreError::Validation(
                "Please upload an image file".to_string(),
            ));
        }
        if input.payload.len() > PHOTO_MAX_BYTES {
            return Err(CoreError::FileTooLarge);
        }

        let object_key = format!(
            "bootcamps/{}/{}_{}",
            bootcamp.id,
            generate_random_string(16),
            input.filename
        );
        let bucket = self.object_storage.bucket();

        self.object_storage
            .put_object(&bucket, &object_key, input.payload, &input.mime_type)
            .await?;

        bootcamp.set_photo(object_key);
        let bootcamp = self.bootcamp_repository.update(bootcamp).await?;
        tracing::info!(bootcamp_id = %bootcamp.id, "Bootcamp photo attached");

        Ok(bootcamp)
    }
}
