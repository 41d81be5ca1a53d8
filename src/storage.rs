use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use time::format_description;
use tracing::{error, info};

use crate::adapters;
use crate::middleware::PassthroughLayer;
use crate::model::config::StorageConfig;
use crate::model::error::StorageError;
use crate::util;

/// Media file descriptor handed over by the host. The host owns the
/// temporary upload; the adapter reads only `name` and `path`.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub path: PathBuf,
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// URL or path of the stored file, as returned by `save`.
    pub path: String,
}

/// Storage contract the host expects from each of its backends.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Uploads the file and resolves with its absolute public URL.
    async fn save(
        &self,
        file: &UploadedFile,
        target_dir: Option<&str>,
    ) -> Result<String, StorageError>;

    async fn exists(
        &self,
        filename: &str,
        target_dir: Option<&str>,
    ) -> Result<bool, StorageError>;

    /// Serving step the host wires into its request pipeline.
    fn serve(&self) -> PassthroughLayer;

    async fn delete(
        &self,
        file_name: &str,
        target_dir: Option<&str>,
    ) -> Result<bool, StorageError>;

    /// Fetches the raw bytes of a previously stored file.
    async fn read(&self, options: &ReadOptions) -> Result<Vec<u8>, StorageError>;
}

/// Object-storage backend. One vendor client is built at construction and
/// shared by every call; each operation is an independent request with no
/// state beyond the read-only configuration.
pub struct ObjectStorage {
    config: StorageConfig,
    client: Arc<dyn adapters::ObjectClient>,
    clock: Box<dyn util::clock::Clock>,
}

impl ObjectStorage {
    /// Builds the vendor SDK client from the configured credentials,
    /// region and optional endpoint. Path-style addressing is forced so
    /// S3-compatible services resolve without virtual-host DNS.
    pub async fn new(config: StorageConfig) -> Self {
        let credentials = aws_sdk_s3::config::Credentials::new(
            config.operator.clone(),
            config.password.clone(),
            None,
            None,
            "mediastore",
        );

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build();
        let client = aws_sdk_s3::Client::from_conf(s3_config);

        Self::with_client(config, Arc::new(client))
    }

    /// Uses an already-built vendor client, for hosts that construct their
    /// own SDK client or tests that substitute a fake.
    pub fn with_client(config: StorageConfig, client: Arc<dyn adapters::ObjectClient>) -> Self {
        Self {
            config,
            client,
            clock: Box::new(util::clock::SystemClock),
        }
    }

    /// Replaces the time source used for folder derivation.
    pub fn with_clock(mut self, clock: Box<dyn util::clock::Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// `/<prefix><folder><name>`, where `folder` is the current instant
    /// rendered through the configured pattern with any leading `/`
    /// stripped. Derived from the wall clock, so two uploads sharing a
    /// name within the same folder granularity will collide; the adapter
    /// does not detect that.
    fn remote_path(&self, file: &UploadedFile) -> Result<String, StorageError> {
        let pattern = &self.config.folder;

        let format = format_description::parse(pattern).map_err(|_| {
            StorageError::FolderPattern {
                pattern: pattern.clone(),
            }
        })?;
        let folder = self
            .clock
            .now()
            .format(&format)
            .map_err(|_| StorageError::FolderPattern {
                pattern: pattern.clone(),
            })?;
        let folder = folder.trim_start_matches('/');

        Ok(format!("/{}{}{}", self.config.prefix, folder, file.name))
    }
}

#[async_trait]
impl StorageAdapter for ObjectStorage {
    async fn save(
        &self,
        file: &UploadedFile,
        _target_dir: Option<&str>,
    ) -> Result<String, StorageError> {
        info!(context = "save", filename = %file.name, "called");

        let remote_path = self.remote_path(file)?;

        let res = self
            .client
            .put_file(
                &self.config.bucket,
                remote_path.trim_start_matches('/'),
                &file.path,
            )
            .await;

        let response = match res {
            Err(err) => {
                error!(error_message = %err, error_group = "put_file");
                return Err(StorageError::Upload {
                    code: "transport".to_string(),
                    message: err.message,
                });
            }
            Ok(response) => response,
        };

        if !response.is_success() {
            let code = response
                .code
                .unwrap_or_else(|| response.status_code.to_string());
            let message = response.message.unwrap_or_default();
            error!(error_message = %message, error_group = "put_file");
            return Err(StorageError::Upload { code, message });
        }

        let mut url = format!("{}{}", self.config.domain, remote_path);
        if let Some(version) = &self.config.image_version {
            url.push_str(version);
        }

        Ok(url)
    }

    /// Always `false`, without contacting the remote service. The adapter
    /// cannot yet verify remote existence by key.
    /// TODO: once a file-key option exists, check the remote key here
    async fn exists(
        &self,
        _filename: &str,
        _target_dir: Option<&str>,
    ) -> Result<bool, StorageError> {
        Ok(false)
    }

    /// Every URL `save` returns is absolute, so there is nothing to serve
    /// locally.
    fn serve(&self) -> PassthroughLayer {
        PassthroughLayer
    }

    /// Always `true`, without deleting anything. Deliberate no-op.
    async fn delete(
        &self,
        _file_name: &str,
        _target_dir: Option<&str>,
    ) -> Result<bool, StorageError> {
        Ok(true)
    }

    async fn read(&self, options: &ReadOptions) -> Result<Vec<u8>, StorageError> {
        info!(context = "read", path = %options.path, "called");

        let key = util::path::key_from_url(&options.path)?;

        match self.client.get_file(&self.config.bucket, &key).await {
            Err(err) => {
                error!(error_message = %err, error_group = "get_file");
                Err(StorageError::Read)
            }
            Ok(bytes) => Ok(bytes),
        }
    }
}
