//! Typed access to the consent entries in the browser's local storage.
//!
//! Schema (all values are strings):
//!
//! | key                        | value                                                   |
//! |----------------------------|---------------------------------------------------------|
//! | `cookie-consent`           | `all`, `necessary`, `rejected` or `custom`              |
//! | `cookie-consent-details`   | JSON `{"necessary":true,"analytics":bool,"marketing":bool}` |
//! | `cookie-consent-timestamp` | RFC 3339 time of the choice                             |
//!
//! Any non-empty `cookie-consent` value counts as a decision and keeps the
//! banner hidden.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[cfg(test)]
use chrono::{DateTime, Utc};
use log::{info, warn};
use thiserror::Error;
use web_sys::window;

#[cfg(test)]
use super::model::{ConsentCategories, ConsentChoice};
use super::model::ConsentRecord;

pub const CONSENT_KEY: &str = "cookie-consent";
pub const DETAILS_KEY: &str = "cookie-consent-details";
pub const TIMESTAMP_KEY: &str = "cookie-consent-timestamp";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write {0}")]
    Write(String),
    #[error("failed to encode consent details: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    #[cfg(test)]
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let storage = window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    #[cfg(test)]
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

/// Process-local store. Used in tests, and when the browser refuses local
/// storage (private mode, disabled cookies).
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    #[cfg(test)]
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Consent record on top of a key-value backend. Provided through context so
/// the banner never reaches for `window` itself.
#[derive(Clone)]
pub struct ConsentStore {
    backend: Rc<dyn KeyValueStore>,
}

impl PartialEq for ConsentStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl ConsentStore {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn browser() -> Self {
        match BrowserStorage::open() {
            Ok(storage) => Self::new(Rc::new(storage)),
            Err(e) => {
                warn!("{}; consent will only last for this page view", e);
                Self::new(Rc::new(MemoryStore::default()))
            }
        }
    }

    pub fn has_decision(&self) -> bool {
        self.backend
            .get(CONSENT_KEY)
            .map_or(false, |v| !v.trim().is_empty())
    }

    /// Reads the stored record. Missing or unreadable details fall back to
    /// the flags implied by the choice.
    #[cfg(test)]
    pub fn load(&self) -> Option<ConsentRecord> {
        let choice = self.backend.get(CONSENT_KEY)?.parse::<ConsentChoice>().ok()?;
        let categories = self
            .backend
            .get(DETAILS_KEY)
            .and_then(|raw| serde_json::from_str::<ConsentCategories>(&raw).ok())
            .unwrap_or_else(|| ConsentCategories::implied_by(choice));
        let decided_at = self
            .backend
            .get(TIMESTAMP_KEY)
            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
            .map(|t| t.with_timezone(&Utc));

        Some(ConsentRecord {
            choice,
            categories,
            decided_at,
        })
    }

    pub fn save(&self, record: &ConsentRecord) -> Result<(), StorageError> {
        let details = serde_json::to_string(&record.categories)?;
        self.backend.set(DETAILS_KEY, &details)?;
        if let Some(decided_at) = record.decided_at {
            self.backend.set(TIMESTAMP_KEY, &decided_at.to_rfc3339())?;
        }
        // Written last: its presence is what hides the banner.
        self.backend.set(CONSENT_KEY, record.choice.as_str())?;
        info!("Stored cookie consent: {}", record.choice);
        Ok(())
    }

    #[cfg(test)]
    pub fn clear(&self) -> Result<(), StorageError> {
        for key in [CONSENT_KEY, DETAILS_KEY, TIMESTAMP_KEY] {
            self.backend.remove(key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::model::BannerState;
    use chrono::TimeZone;

    fn store() -> (Rc<MemoryStore>, ConsentStore) {
        let backend = Rc::new(MemoryStore::default());
        (backend.clone(), ConsentStore::new(backend))
    }

    #[test]
    fn banner_shows_until_accept_all_is_stored() {
        let (_, consent) = store();
        assert!(BannerState::initial(consent.has_decision()).is_visible());

        consent.save(&ConsentRecord::new(ConsentChoice::All, Utc::now())).unwrap();

        // A later render over the same storage.
        assert!(!BannerState::initial(consent.has_decision()).is_visible());
    }

    #[test]
    fn save_writes_the_documented_schema() {
        let (backend, consent) = store();
        let when = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        consent.save(&ConsentRecord::custom(true, false, when)).unwrap();

        assert_eq!(backend.get(CONSENT_KEY).as_deref(), Some("custom"));
        assert_eq!(
            backend.get(DETAILS_KEY).as_deref(),
            Some(r#"{"necessary":true,"analytics":true,"marketing":false}"#)
        );
        assert_eq!(backend.get(TIMESTAMP_KEY).as_deref(), Some("2025-01-02T03:04:05+00:00"));

        assert_eq!(consent.load(), Some(ConsentRecord::custom(true, false, when)));
    }

    #[test]
    fn details_fall_back_to_the_choice() {
        let (backend, consent) = store();
        backend.set(CONSENT_KEY, "all").unwrap();
        backend.set(DETAILS_KEY, "not json").unwrap();

        let record = consent.load().unwrap();
        assert_eq!(record.categories, ConsentCategories::optional(true, true));
        assert_eq!(record.decided_at, None);
    }

    #[test]
    fn unknown_values_still_count_as_a_decision() {
        let (backend, consent) = store();
        backend.set(CONSENT_KEY, "legacy-yes").unwrap();
        assert!(consent.has_decision());
        assert!(consent.load().is_none());
    }

    #[test]
    fn clearing_storage_brings_the_banner_back() {
        let (_, consent) = store();
        consent.save(&ConsentRecord::new(ConsentChoice::Rejected, Utc::now())).unwrap();
        consent.clear().unwrap();
        assert!(!consent.has_decision());
        assert!(BannerState::initial(consent.has_decision()).is_visible());
    }
}
