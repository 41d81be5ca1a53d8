use serde::Deserialize;

/// Adapter configuration. Read once at construction, never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Bucket or namespace uploads land in.
    pub bucket: String,
    /// Operator identity used to authenticate against the service.
    pub operator: String,
    /// Operator secret.
    pub password: String,
    /// Custom endpoint URL, for S3-compatible services.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_region")]
    pub region: String,
    /// Public base URL prepended to every stored path.
    pub domain: String,
    /// Path prefix inside the bucket.
    #[serde(default)]
    pub prefix: String,
    /// Time-based folder pattern, in `time` format-description syntax.
    /// The upload instant is rendered through it to group files.
    #[serde(default = "default_folder")]
    pub folder: String,
    /// Optional suffix appended to returned URLs, e.g. a cache-busting
    /// query string.
    #[serde(default)]
    pub image_version: Option<String>,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_folder() -> String {
    "[year]/[month]/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: StorageConfig = serde_json::from_str(
            r#"{
                "bucket": "media",
                "operator": "op",
                "password": "secret",
                "domain": "https://example.com"
            }"#,
        )
        .unwrap();

        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.prefix, "");
        assert_eq!(config.folder, "[year]/[month]/");
        assert!(config.endpoint.is_none());
        assert!(config.image_version.is_none());
    }

    #[test]
    fn test_full_config() {
        let config: StorageConfig = serde_json::from_str(
            r#"{
                "bucket": "media",
                "operator": "op",
                "password": "secret",
                "endpoint": "https://storage.example.net",
                "region": "eu-west-1",
                "domain": "https://cdn.example.com",
                "prefix": "uploads/",
                "folder": "[year]/",
                "image_version": "?v=2"
            }"#,
        )
        .unwrap();

        assert_eq!(config.endpoint.as_deref(), Some("https://storage.example.net"));
        assert_eq!(config.prefix, "uploads/");
        assert_eq!(config.folder, "[year]/");
        assert_eq!(config.image_version.as_deref(), Some("?v=2"));
    }
}
