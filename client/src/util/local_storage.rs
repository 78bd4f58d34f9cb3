//! Browser `localStorage` backend for the contact draft store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only `web-sys` storage glue behind the core's
//! `DraftStorage` trait. Without `hydrate` the backend behaves as an empty
//! store that discards writes, keeping server rendering deterministic.

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use interaction::draft::{DraftError, DraftStorage};

/// `window.localStorage`, resolved per call so a storage failure never sticks.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, DraftError> {
    let window = web_sys::window().ok_or_else(|| DraftError::Unavailable("no window".to_owned()))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(DraftError::Unavailable("localStorage disabled".to_owned())),
        Err(e) => Err(DraftError::Unavailable(format!("{e:?}"))),
    }
}

impl DraftStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DraftError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| DraftError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::trace!("no browser storage to read {key}");
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DraftError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| DraftError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::trace!("no browser storage to write {key} ({} bytes)", value.len());
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), DraftError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| DraftError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::trace!("no browser storage to remove {key}");
            Ok(())
        }
    }
}
