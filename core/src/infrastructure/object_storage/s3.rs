use std::time::Duration;

use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    presigning::PresigningConfig,
    primitives::ByteStream,
};
use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError},
    storage::{entities::PresignedUrl, ports::ObjectStoragePort},
};

#[derive(Clone)]
pub struct S3ObjectStorage {
    client: Client,
    bucket: String,
}

impl S3ObjectStorage {
    pub fn new(config: ObjectStorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "campdir",
        );

        let endpoint = config.endpoint.trim_end_matches('/');

        tracing::info!(
            endpoint = %endpoint,
            region = %config.region,
            use_ssl = config.use_ssl,
            "Initializing object storage client"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(endpoint)
            .force_path_style(true)
            .build();

        let client = Client::from_conf(s3_config);

        Self {
            client,
            bucket: config.bucket,
        }
    }
}

impl ObjectStoragePort for S3ObjectStorage {
    fn bucket(&self) -> String {
        self.bucket.clone()
    }

    #[instrument(skip(self, payload))]
    async fn put_object(
        &self,
        bucket: &str,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<(), CoreError> {
        let payload_size = payload.len();

        tracing::info!(
            bucket = %bucket,
            object_key = %object_key,
            size = payload_size,
            content_type = %content_type,
            "Uploading object to storage"
        );

        let byte_stream = ByteStream::from(payload);

        self.client
            .put_object()
            .bucket(bucket)
            .key(object_key)
            .content_type(content_type)
            .body(byte_stream)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    object_key = %object_key,
                    payload_size = payload_size,
                    "Failed to upload object"
                );
                CoreError::ObjectStorage(format!("Failed to upload object: {e}"))
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn presign_get_url(
        &self,
        bucket: &str,
        object_key: &str,
        expires_in: Duration,
    ) -> Result<PresignedUrl, CoreError> {
        tracing::debug!(
            bucket = %bucket,
            object_key = %object_key,
            expires_in_secs = expires_in.as_secs(),
            "Generating presigned GET URL"
        );

        let presigning_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| CoreError::ObjectStorage(format!("Invalid expiration: {e}")))?;

        let presigned_request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(object_key)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    object_key = %object_key,
                    "Failed to generate presigned GET URL"
                );
                CoreError::ObjectStorage(format!("Failed to generate presigned URL: {e}"))
            })?;

        Ok(PresignedUrl {
            url: presigned_request.uri().to_string(),
            expires_in_seconds: expires_in.as_secs(),
        })
    }

    #[instrument(skip(self))]
    async fn delete_object(&self, bucket: &str, object_key: &str) -> Result<(), CoreError> {
        tracing::info!(
            bucket = %bucket,
            object_key = %object_key,
            "Deleting object from storage"
        );

        self.client
            .delete_object()
            .bucket(bucket)
            .key(object_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    object_key = %object_key,
                    "Failed to delete object"
                );
                CoreError::ObjectStorage(format!("Failed to delete object: {e}"))
            })?;

        Ok(())
    }
}
