use crate::model::error::StorageError;

/// Reduces a URL or path, as returned by `save`, to the storage key:
/// scheme and host go, so do the query string and a leading `/`.
pub fn key_from_url(path: &str) -> Result<String, StorageError> {
    let after_host = if let Some((_, rest)) = path.split_once("://") {
        match rest.split_once('/') {
            Some((_, key)) => key,
            None => "",
        }
    } else {
        path.trim_start_matches('/')
    };

    let key = match after_host.split_once(['?', '#']) {
        Some((before, _)) => before,
        None => after_host,
    };

    if key.is_empty() {
        return Err(StorageError::InvalidPath(path.to_string()));
    }

    Ok(key.to_string())
}
