use std::time::Duration;

use sha2::{Digest, Sha256};
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    auth::{
        ports::{HasherPort, MailerPort, TokenSignerPort},
        value_objects::Identity,
    },
    bootcamp::ports::{BootcampRepository, GeocoderPort},
    common::{
        entities::app_errors::CoreError, generate_random_string, policies::ensure_policy,
        services::Service,
    },
    course::ports::CourseRepository,
    health::ports::HealthCheckRepository,
    query::{ListQuery, Page},
    review::ports::ReviewRepository,
    storage::{
        entities::{PresignedUrl, StoredObject},
        policies::can_delete_file,
        ports::{FileService, ObjectStoragePort, StoredObjectRepository},
        value_objects::{CreateStoredObject, UploadFileInput},
    },
    user::ports::UserRepository,
};

const UPLOAD_MAX_BYTES: usize = 52_428_800; // 50 MB
const DOWNLOAD_URL_TTL: Duration = Duration::from_secs(300);

impl<B, C, R, U, SO, OS, H, T, M, G, HC> FileService for Service<B, C, R, U, SO, OS, H, T, M, G, HC>
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
    #[instrument(skip(self, input), fields(filename = %input.filename))]
    async fn upload_file(
        &self,
        identity: Identity,
        input: UploadFileInput,
    ) -> Result<StoredObject, CoreError> {
        if input.payload.len() > UPLOAD_MAX_BYTES {
            return Err(CoreError::FileTooLarge);
        }

        let mut hasher = Sha256::new();
        hasher.update(&input.payload);
        let checksum_sha256 = hex::encode(hasher.finalize());

        let bucket = self.object_storage.bucket();
        let object_key = format!(
            "uploads/{}/{}_{}",
            identity.id(),
            generate_random_string(16),
            input.filename
        );

        let stored_object = StoredObject::new(CreateStoredObject {
            bucket: bucket.clone(),
            object_key: object_key.clone(),
            original_name: input.filename,
            mime_type: input.mime_type.clone(),
            size_bytes: input.payload.len() as i64,
            checksum_sha256,
            metadata: input.metadata,
            uploaded_by: identity.id(),
        });

        self.object_storage
            .put_object(&bucket, &object_key, input.payload, &input.mime_type)
            .await?;

        let stored_object = self.stored_object_repository.create(stored_object).await?;

        tracing::info!(
            object_id = %stored_object.id,
            bucket = %bucket,
            object_key = %object_key,
            "File uploaded"
        );

        Ok(stored_object)
    }

    #[instrument(skip(self, query))]
    async fn list_files(
        &self,
        _identity: Identity,
        query: ListQuery,
    ) -> Result<Page<StoredObject>, CoreError> {
        let result = self.stored_object_repository.list(query).await?;

        tracing::debug!(count = result.items.len(), total = result.total, "Listed files");

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn get_download_url(
        &self,
        _identity: Identity,
        object_id: Uuid,
    ) -> Result<PresignedUrl, CoreError> {
        let stored_object = self
            .stored_object_repository
            .get_by_id(object_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("No file found with id: {object_id}")))?;

        let presigned_url = self
            .object_storage
            .presign_get_url(
                &stored_object.bucket,
                &stored_object.object_key,
                DOWNLOAD_URL_TTL,
            )
            .await?;

        tracing::info!(object_id = %object_id, "Generated download URL");

        Ok(presigned_url)
    }

    #[instrument(skip(self))]
    async fn delete_file(&self, identity: Identity, object_id: Uuid) -> Result<(), CoreError> {
        let stored_object = self
            .stored_object_repository
            .get_by_id(object_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("No file found with id: {object_id}")))?;

        ensure_policy(
            can_delete_file(&identity, &stored_object),
            "insufficient permissions to delete this file",
        )?;

        self.object_storage
            .delete_object(&stored_object.bucket, &stored_object.object_key)
            .await?;

        self.stored_object_repository.delete(object_id).await?;

        tracing::info!(object_id = %object_id, "File deleted");

        Ok(())
    }
}
