use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use uuid::Uuid;

use crate::domain::{
    auth::value_objects::Identity,
    common::entities::app_errors::CoreError,
    query::{ListQuery, Page},
    storage::{
        entities::{PresignedUrl, StoredObject},
        value_objects::UploadFileInput,
    },
};

/// Port for object storage operations (S3-compatible).
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    /// Name of the configured bucket.
    fn bucket(&self) -> String;

    /// Upload an object directly to storage.
    fn put_object(
        &self,
        bucket: &str,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Generate a presigned GET URL for downloads.
    fn presign_get_url(
        &self,
        bucket: &str,
        object_key: &str,
        expires_in: Duration,
    ) -> impl Future<Output = Result<PresignedUrl, CoreError>> + Send;

    /// Delete an object from storage.
    fn delete_object(
        &self,
        bucket: &str,
        object_key: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Repository for stored object metadata.
#[cfg_attr(test, mockall::automock)]
pub trait StoredObjectRepository: Send + Sync {
    fn create(
        &self,
        object: StoredObject,
    ) -> impl Future<Output = Result<StoredObject, CoreError>> + Send;

    /// List stored objects through the generic query layer.
    fn list(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<StoredObject>, CoreError>> + Send;

    fn get_by_id(
        &self,
        object_id: Uuid,
    ) -> impl Future<Output = Result<Option<StoredObject>, CoreError>> + Send;

    fn delete(&self, object_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for file storage operations.
#[cfg_attr(test, mockall::automock)]
pub trait FileService: Send + Sync {
    /// Upload a file directly (multipart form).
    fn upload_file(
        &self,
        identity: Identity,
        input: UploadFileInput,
    ) -> impl Future<Output = Result<StoredObject, CoreError>> + Send;

    fn list_files(
        &self,
        identity: Identity,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<StoredObject>, CoreError>> + Send;

    fn get_download_url(
        &self,
        identity: Identity,
        object_id: Uuid,
    ) -> impl Future<Output = Result<PresignedUrl, CoreError>> + Send;

    fn delete_file(
        &self,
        identity: Identity,
        object_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
