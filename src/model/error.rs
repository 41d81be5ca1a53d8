use thiserror::Error;

/// Storage adapter errors. Every failure propagates immediately; there is
/// no retry or local recovery anywhere in the adapter.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The vendor rejected the upload, or the write never reached it.
    /// Carries the vendor's error code and text.
    #[error("[{code}] {message}")]
    Upload { code: String, message: String },

    /// Fetch failed. Vendor detail is logged, never surfaced.
    #[error("could not read file from storage")]
    Read,

    /// The read path could not be reduced to a storage key.
    #[error("invalid storage path: {0}")]
    InvalidPath(String),

    /// The configured folder pattern failed to parse or format.
    #[error("invalid folder pattern: {pattern}")]
    FolderPattern { pattern: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_message_format() {
        let err = StorageError::Upload {
            code: "1001".to_string(),
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "[1001] quota exceeded");
    }

    #[test]
    fn test_read_message_is_generic() {
        assert_eq!(
            StorageError::Read.to_string(),
            "could not read file from storage"
        );
    }
}
