//! sessionStorage-backed cache.
//!
//! Entries live for the current browser session and are cleared when the
//! tab/window is closed, so a reload keeps the user signed in while a new
//! visit starts at the login screen.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use super::dom;

/// Cache operation errors.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("sessionStorage not available")]
    StorageUnavailable,
    #[error("failed to serialize cache entry")]
    SerializationFailed,
    #[error("failed to write to sessionStorage")]
    WriteFailed,
    #[error("failed to remove from sessionStorage")]
    RemoveFailed,
}

/// Get cached data from sessionStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store data in sessionStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| CacheError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| CacheError::WriteFailed)
}

/// Remove an entry from sessionStorage.
pub fn remove(key: &str) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    storage
        .remove_item(key)
        .map_err(|_| CacheError::RemoveFailed)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_set_get_remove() {
        let key = "erp_test_entry";
        set(key, &vec!["a".to_string(), "b".to_string()]).expect("write");
        assert_eq!(get::<Vec<String>>(key), Some(vec!["a".to_string(), "b".to_string()]));

        remove(key).expect("remove");
        assert_eq!(get::<Vec<String>>(key), None);
    }

    #[wasm_bindgen_test]
    fn test_get_wrong_shape_is_none() {
        let key = "erp_test_shape";
        set(key, &"text").expect("write");
        assert_eq!(get::<u32>(key), None);
        let _ = remove(key);
    }
}
