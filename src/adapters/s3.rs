use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::primitives::ByteStream;

use crate::adapters::{self, ClientError, PutResponse};

#[async_trait]
impl adapters::ObjectClient for aws_sdk_s3::Client {
    async fn put_file(
        &self,
        bucket: &str,
        key: &str,
        local_path: &Path,
    ) -> Result<PutResponse, ClientError> {
        let body = ByteStream::from_path(local_path)
            .await
            .map_err(|err| ClientError {
                message: format!(
                    "failed to open local file at: {}, {}",
                    local_path.display(),
                    err
                ),
            })?;

        let req = self
            .put_object()
            .bucket(bucket)
            .key(key)
            .if_none_match("*")
            .body(body);

        match req.send().await {
            Ok(_) => Ok(PutResponse::ok()),
            Err(err) => {
                if err.as_service_error().is_none() {
                    return Err(ClientError {
                        message: format!("failed to put_object at: {}, {}", key, err),
                    });
                }

                let status_code = err
                    .raw_response()
                    .map(|raw| raw.status().as_u16())
                    .unwrap_or(0);

                Ok(PutResponse {
                    status_code,
                    code: err.code().map(str::to_string),
                    message: err.message().map(str::to_string),
                })
            }
        }
    }

    async fn get_file(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ClientError> {
        let req = self.get_object().bucket(bucket).key(key);

        let out = req.send().await.map_err(|err| ClientError {
            message: format!("failed to get_object: {}, {}", key, err),
        })?;

        let bytes = out.body.collect().await.map_err(|err| ClientError {
            message: format!("failed to collect body: {}, {}", key, err),
        })?;

        Ok(bytes.into_bytes().to_vec())
    }
}
