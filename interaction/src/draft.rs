//! Contact form draft model and its key-value persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The contact form stages an unsent message in browser local storage so a
//! reload does not lose typed content. Storage is abstracted behind
//! [`DraftStorage`] so the store logic runs in tests and under SSR; the
//! browser-backed implementation lives in the client.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best effort. A malformed or unreadable record is treated as
//! absent and a failed write is dropped; both are logged and never reach the
//! user or interrupt rendering.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Local storage key holding the serialized draft.
pub const DRAFT_STORAGE_KEY: &str = "contactFormData";

/// Field values of an unsent contact message.
///
/// Every field is optional at rest: a stored record missing a field
/// deserializes with that field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// One editable field of [`ContactDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Subject,
    Message,
}

impl DraftField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The form control `name` attribute for this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl ContactDraft {
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Subject => &self.subject,
            DraftField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
            DraftField::Subject => &mut self.subject,
            DraftField::Message => &mut self.message,
        };
        *slot = value;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        DraftField::ALL.into_iter().all(|f| self.get(f).is_empty())
    }

    /// Every required field holds something other than whitespace.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        DraftField::ALL.into_iter().all(|f| !self.get(f).trim().is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    /// Storage backend is missing (no window, storage disabled).
    #[error("draft storage unavailable: {0}")]
    Unavailable(String),
    /// Reading the stored record failed.
    #[error("failed to read draft: {0}")]
    Read(String),
    /// Writing or removing the stored record failed (quota, privacy mode).
    #[error("failed to write draft: {0}")]
    Write(String),
    /// The stored record is not a valid draft.
    #[error("malformed stored draft: {0}")]
    Decode(serde_json::Error),
    #[error("failed to encode draft: {0}")]
    Encode(serde_json::Error),
}

/// String key-value backend the draft is persisted into.
pub trait DraftStorage {
    /// # Errors
    ///
    /// Returns [`DraftError::Unavailable`] or [`DraftError::Read`] when the
    /// backend cannot be queried.
    fn get(&self, key: &str) -> Result<Option<String>, DraftError>;

    /// # Errors
    ///
    /// Returns [`DraftError::Write`] when the value cannot be stored.
    fn set(&self, key: &str, value: &str) -> Result<(), DraftError>;

    /// # Errors
    ///
    /// Returns [`DraftError::Write`] when the entry cannot be removed.
    fn remove(&self, key: &str) -> Result<(), DraftError>;
}

/// In-memory backend. Used under SSR and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    reject_writes: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose writes always fail, as with an exhausted quota.
    #[must_use]
    pub fn read_only() -> Self {
        Self { entries: RefCell::default(), reject_writes: true }
    }

    /// Seed a raw entry, bypassing encoding.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl DraftStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DraftError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DraftError> {
        if self.reject_writes {
            return Err(DraftError::Write("storage is read-only".to_owned()));
        }
        self.insert_raw(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DraftError> {
        if self.reject_writes {
            return Err(DraftError::Write("storage is read-only".to_owned()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: DraftStorage + ?Sized> DraftStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>, DraftError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DraftError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), DraftError> {
        (**self).remove(key)
    }
}

/// Draft persistence over a [`DraftStorage`] backend.
#[derive(Debug)]
pub struct DraftStore<S> {
    storage: S,
    key: String,
}

impl<S: DraftStorage> DraftStore<S> {
    /// Store under [`DRAFT_STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DRAFT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: &str) -> Self {
        Self { storage, key: key.to_owned() }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the stored draft, surfacing every failure.
    ///
    /// # Errors
    ///
    /// Returns the backend error, or [`DraftError::Decode`] for a record that
    /// is not a JSON draft object.
    pub fn try_load(&self) -> Result<Option<ContactDraft>, DraftError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(DraftError::Decode)
    }

    /// The persisted draft, or the empty draft if absent or unusable.
    pub fn load(&self) -> ContactDraft {
        match self.try_load() {
            Ok(Some(draft)) => draft,
            Ok(None) => ContactDraft::default(),
            Err(e) => {
                log::warn!("discarding stored contact draft: {e}");
                ContactDraft::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`DraftError::Encode`] or the backend write error.
    pub fn try_save(&self, draft: &ContactDraft) -> Result<(), DraftError> {
        let raw = serde_json::to_string(draft).map_err(DraftError::Encode)?;
        self.storage.set(&self.key, &raw)
    }

    /// Overwrite the persisted draft. Failures are logged and dropped.
    pub fn save(&self, draft: &ContactDraft) {
        if let Err(e) = self.try_save(draft) {
            log::warn!("contact draft not saved: {e}");
        }
    }

    /// Remove the persisted draft. Safe to call when nothing is stored.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            log::warn!("contact draft not cleared: {e}");
        }
    }
}
