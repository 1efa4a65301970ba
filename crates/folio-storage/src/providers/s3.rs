//! S3-compatible object storage provider (requires the `s3` feature).

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{debug, info, warn};

use folio_core::config::S3StorageConfig;
use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_core::traits::storage::StorageProvider;

/// Uploaded names are unique, so objects never change once written.
const CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// S3-compatible storage provider.
#[derive(Debug, Clone)]
pub struct S3StorageProvider {
    client: Client,
    bucket: String,
    public_base: String,
}

impl S3StorageProvider {
    /// Create a new S3 storage provider.
    ///
    /// Static credentials are used when an access key is configured;
    /// otherwise the default AWS credential chain applies.
    pub async fn new(config: &S3StorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("storage.s3.bucket must be set"));
        }

        info!(
            endpoint = %config.endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "Initializing S3 storage provider"
        );

        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));
        if !config.access_key.is_empty() {
            loader = loader.credentials_provider(Credentials::new(
                config.access_key.clone(),
                config.secret_key.clone(),
                None,
                None,
                "folio-config",
            ));
        }
        let shared = loader.load().await;

        let mut builder =
            aws_sdk_s3::config::Builder::from(&shared).force_path_style(config.force_path_style);
        if !config.endpoint.is_empty() {
            builder = builder.endpoint_url(config.endpoint.clone());
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            public_base: public_base(config),
        })
    }
}

/// Base URL objects are publicly reachable under.
fn public_base(config: &S3StorageConfig) -> String {
    if !config.public_base_url.is_empty() {
        config.public_base_url.trim_end_matches('/').to_string()
    } else if !config.endpoint.is_empty() {
        format!("{}/{}", config.endpoint.trim_end_matches('/'), config.bucket)
    } else {
        format!("https://{}.s3.{}.amazonaws.com", config.bucket, config.region)
    }
}

fn s3_err<E>(message: String) -> impl FnOnce(E) -> AppError
where
    E: std::error::Error + Send + Sync + 'static,
{
    move |e| AppError::with_source(ErrorKind::Storage, message, e)
}

#[async_trait]
impl StorageProvider for S3StorageProvider {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) => {
                warn!(bucket = %self.bucket, error = %e, "S3 health check failed");
                Ok(false)
            }
        }
    }

    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<String> {
        let size = data.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .cache_control(CACHE_CONTROL)
            .send()
            .await
            .map_err(s3_err(format!("Failed to upload object: {key}")))?;

        debug!(key, bytes = size, "Uploaded object");
        Ok(self.public_url(key))
    }

    async fn read_bytes(&self, key: &str) -> AppResult<Bytes> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|se| se.is_no_such_key()) {
                    AppError::not_found(format!("Object not found: {key}"))
                } else {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to fetch object: {key}"),
                        e,
                    )
                }
            })?;

        let data = output
            .body
            .collect()
            .await
            .map_err(s3_err(format!("Failed to read object body: {key}")))?;
        Ok(data.into_bytes())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(s3_err(format!("Failed to delete object: {key}")))?;
        debug!(key, "Deleted object");
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.as_service_error().is_some_and(|se| se.is_not_found()) => Ok(false),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to stat object: {key}"),
                e,
            )),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base, key.trim_start_matches('/'))
    }
}
