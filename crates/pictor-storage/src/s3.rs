use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};
use pictor_core::StorageBackend;

/// S3 storage implementation
#[derive(Clone)]
pub struct S3Storage {
    store: AmazonS3,
    bucket: String,
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
    url_base: Option<String>,     // Public URL prefix override (CDN or reverse proxy)
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO, "https://nyc3.digitaloceanspaces.com" for DigitalOcean Spaces)
    /// * `url_base` - Optional public URL prefix; when set, blob URLs are
    ///   `{url_base}/{key}` regardless of endpoint
    pub async fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
        url_base: Option<String>,
    ) -> StorageResult<Self> {
        // Build AmazonS3 object store from environment and explicit settings.
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region.clone())
            .with_bucket_name(bucket.clone());

        if let Some(ref endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(S3Storage {
            store,
            bucket,
            region,
            endpoint_url,
            url_base,
        })
    }

    /// Generate public URL for an S3 object
    ///
    /// `url_base` wins when configured (blobs served through a CDN or proxy).
    /// For S3-compatible providers the endpoint is used path-style; plain AWS
    /// uses the standard virtual-hosted format.
    fn generate_url(&self, key: &str) -> String {
        if let Some(ref base) = self.url_base {
            format!("{}/{}", base.trim_end_matches('/'), key)
        } else if let Some(ref endpoint) = self.endpoint_url {
            let base_url = endpoint.trim_end_matches('/');
            format!("{}/{}/{}", base_url, self.bucket, key)
        } else {
            format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            )
        }
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> StorageResult<String> {
        let size = data.len() as u64;
        let location = Path::from(key.to_string());

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());

        let start = std::time::Instant::now();

        self.store
            .put_opts(
                &location,
                PutPayload::from(data),
                PutOptions::from(attributes),
            )
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 put failed"
                );
                StorageError::UploadFailed(e.to_string())
            })?;

        let url = self.generate_url(key);

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 put successful"
        );

        Ok(url)
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let location = Path::from(key.to_string());

        match self.store.head(&location).await {
            Ok(_) => Ok(true),
            Err(ObjectStoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn build_storage(
        endpoint: Option<&str>,
        url_base: Option<&str>,
    ) -> StorageResult<S3Storage> {
        S3Storage::new(
            "pictor-media".to_string(),
            "us-east-1".to_string(),
            endpoint.map(String::from),
            url_base.map(String::from),
        )
        .await
    }

    #[tokio::test]
    async fn test_generate_url_aws_format() {
        let storage = build_storage(None, None).await.unwrap();
        assert_eq!(
            storage.generate_url("media/abc/original"),
            "https://pictor-media.s3.us-east-1.amazonaws.com/media/abc/original"
        );
    }

    #[tokio::test]
    async fn test_generate_url_custom_endpoint_path_style() {
        let storage = build_storage(Some("http://localhost:9000"), None)
            .await
            .unwrap();
        assert_eq!(
            storage.generate_url("media/abc/thumbnail"),
            "http://localhost:9000/pictor-media/media/abc/thumbnail"
        );
    }

    #[tokio::test]
    async fn test_generate_url_base_override_wins() {
        let storage = build_storage(Some("http://localhost:9000"), Some("https://cdn.example.com/"))
            .await
            .unwrap();
        assert_eq!(
            storage.generate_url("media/abc/original"),
            "https://cdn.example.com/media/abc/original"
        );
    }
}
