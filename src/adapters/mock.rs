use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::adapters::{self, ClientError, PutResponse};

/// What the adapter asked the vendor client to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Put { bucket: String, key: String },
    Get { bucket: String, key: String },
}

/// Vendor client double. Records every call and replays canned responses
/// so adapter behavior can be tested without a remote service.
#[derive(Default)]
pub struct MockClient {
    pub put_response: Option<PutResponse>,
    pub put_error: Option<ClientError>,
    pub get_response: Option<Vec<u8>>,
    pub get_error: Option<ClientError>,
    pub calls: Mutex<Vec<MockCall>>,
}

impl MockClient {
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls
            .lock()
            .expect("failed to acquire `calls` guard")
            .clone()
    }
}

#[async_trait]
impl adapters::ObjectClient for MockClient {
    async fn put_file(
        &self,
        bucket: &str,
        key: &str,
        _local_path: &Path,
    ) -> Result<PutResponse, ClientError> {
        self.calls
            .lock()
            .expect("failed to acquire `calls` guard")
            .push(MockCall::Put {
                bucket: bucket.to_string(),
                key: key.to_string(),
            });

        if let Some(err) = &self.put_error {
            return Err(err.clone());
        }

        Ok(self.put_response.clone().unwrap_or_else(PutResponse::ok))
    }

    async fn get_file(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ClientError> {
        self.calls
            .lock()
            .expect("failed to acquire `calls` guard")
            .push(MockCall::Get {
                bucket: bucket.to_string(),
                key: key.to_string(),
            });

        if let Some(err) = &self.get_error {
            return Err(err.clone());
        }

        Ok(self.get_response.clone().unwrap_or_default())
    }
}
