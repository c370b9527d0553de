use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

/// Object key for an exported report.
pub fn report_key(user_id: Uuid, report_id: Uuid) -> String {
    format!("reports/{user_id}/{report_id}.md")
}

/// Durable storage for exported report documents.
#[async_trait]
pub trait ReportArchive: Send + Sync {
    async fn put_markdown(&self, key: &str, body: String) -> Result<(), AppError>;
}

pub struct S3ReportArchive {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ReportArchive {
    pub fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ReportArchive for S3ReportArchive {
    async fn put_markdown(&self, key: &str, body: String) -> Result<(), AppError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body.into_bytes()))
            .content_type("text/markdown")
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("S3 upload failed: {e}")))?;

        info!("Uploaded report to s3://{}/{}", self.bucket, key);
        Ok(())
    }
}
