use log::{debug, warn};
use thiserror::Error;
use web_sys::{window, Storage};

use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage rejected the operation: {0}")]
    Rejected(String),
}

/// Session-scoped string key/value store.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.sessionStorage`, looked up on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage() -> Result<Storage, StorageError> {
        window()
            .ok_or(StorageError::Unavailable)?
            .session_storage()
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }
}

pub fn storage_key(route_key: &str) -> String {
    format!("{}{}", config::SCROLL_KEY_PREFIX, route_key)
}

/// Saved offset for a route. Storage failures and unparsable values read
/// as "nothing saved".
pub fn read_offset<S: SessionStore + ?Sized>(store: &S, route_key: &str) -> Option<u32> {
    let key = storage_key(route_key);
    match store.get(&key) {
        Ok(Some(raw)) => match raw.trim().parse::<u32>() {
            Ok(offset) => Some(offset),
            Err(_) => {
                debug!("Ignoring malformed scroll offset {:?} for {}", raw, route_key);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!("Could not read scroll position for {}: {}", route_key, e);
            None
        }
    }
}

/// Last write wins. Failures are logged and dropped.
pub fn write_offset<S: SessionStore + ?Sized>(store: &S, route_key: &str, offset: u32) {
    if let Err(e) = store.set(&storage_key(route_key), &offset.to_string()) {
        warn!("Could not save scroll position for {}: {}", route_key, e);
    }
}
