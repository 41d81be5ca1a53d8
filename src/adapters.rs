use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

pub mod mock;
pub mod s3;

/// Transport-level failure talking to the vendor service.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub message: String,
}

/// Status envelope the vendor returns for an upload. A non-2xx status
/// carries the vendor's error code and text.
#[derive(Debug, Clone)]
pub struct PutResponse {
    pub status_code: u16,
    pub code: Option<String>,
    pub message: Option<String>,
}

impl PutResponse {
    pub fn ok() -> Self {
        Self {
            status_code: 200,
            code: None,
            message: None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Narrow surface of the vendor object-storage client. The adapter only
/// ever writes one object and fetches one object; everything else the
/// vendor SDK offers stays outside the seam so tests can fake it.
#[async_trait]
pub trait ObjectClient: Send + Sync {
    /// Uploads the local file's bytes to `key`, non-overwriting. `Err`
    /// means the request never got a vendor answer; a vendor rejection
    /// comes back as a non-success [`PutResponse`].
    async fn put_file(
        &self,
        bucket: &str,
        key: &str,
        local_path: &Path,
    ) -> Result<PutResponse, ClientError>;

    /// Fetches the raw bytes stored at `key`.
    async fn get_file(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ClientError>;
}
