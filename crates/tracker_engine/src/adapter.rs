use serde::Serialize;
use serde_json::Value;
use tracker_logging::{tracker_debug, tracker_warn};

use crate::KeyValueStore;

/// JSON on top of a [`KeyValueStore`] that fails closed.
///
/// Loads report "absent" for a missing key, unreadable storage, or malformed
/// JSON; saves that fail are logged and dropped, leaving the caller's
/// in-memory state as the only copy for the session.
pub struct PersistenceAdapter {
    store: Box<dyn KeyValueStore>,
}

impl PersistenceAdapter {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn load(&self, key: &str) -> Option<Value> {
        let text = match self.store.get(key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracker_debug!("No stored value for {:?}", key);
                return None;
            }
            Err(err) => {
                tracker_warn!("Failed to read {:?} from storage: {}", key, err);
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(err) => {
                tracker_warn!("Ignoring malformed JSON stored under {:?}: {}", key, err);
                None
            }
        }
    }

    /// Returns whether the value reached storage.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> bool {
        let text = match serde_json::to_string(value) {
            Ok(text) => text,
            Err(err) => {
                tracker_warn!("Failed to serialize value for {:?}: {}", key, err);
                return false;
            }
        };

        match self.store.set(key, &text) {
            Ok(()) => {
                tracker_debug!("Stored {} bytes under {:?}", text.len(), key);
                true
            }
            Err(err) => {
                tracker_warn!("Failed to write {:?} to storage: {}", key, err);
                false
            }
        }
    }
}
