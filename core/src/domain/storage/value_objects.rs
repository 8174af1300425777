use bytes::Bytes;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateStoredObject {
    pub bucket: String,
    pub object_key: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub checksum_sha256: String,
    pub metadata: serde_json::Value,
    pub uploaded_by: Uuid,
}

#[derive(Debug, Clone)]
pub struct UploadFileInput {
    pub filename: String,
    pub mime_type: String,
    pub payload: Bytes,
    pub metadata: serde_json::Value,
}
