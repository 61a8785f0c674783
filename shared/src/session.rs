//! Browser-side session persistence behind a small storage interface.
//!
//! The frontend backs [`SessionStore`] with `localStorage`, `sessionStorage`
//! and `document.cookie`; tests use [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::constants::{STORAGE_TOKEN, STORAGE_USER};
use crate::types::UserProfile;
use crate::utils::non_empty;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StorageArea {
    Local,
    Session,
    Cookie,
}

/// Token lookup order: first non-empty entry wins.
pub const TOKEN_SOURCES: [StorageArea; 3] = [StorageArea::Local, StorageArea::Session, StorageArea::Cookie];

pub trait SessionStore {
    fn get(&self, area: StorageArea, key: &str) -> Option<String>;
    fn set(&self, area: StorageArea, key: &str, value: &str);
    fn remove(&self, area: StorageArea, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<(StorageArea, String), String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, area: StorageArea, key: &str, value: &str) -> Self {
        self.set(area, key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, area: StorageArea, key: &str) -> Option<String> {
        self.entries.borrow().get(&(area, key.to_string())).cloned()
    }

    fn set(&self, area: StorageArea, key: &str, value: &str) {
        self.entries.borrow_mut().insert((area, key.to_string()), value.to_string());
    }

    fn remove(&self, area: StorageArea, key: &str) {
        self.entries.borrow_mut().remove(&(area, key.to_string()));
    }
}

pub fn resolve_token(store: &impl SessionStore) -> Option<String> {
    TOKEN_SOURCES.iter()
        .find_map(|area| non_empty(store.get(*area, STORAGE_TOKEN)))
}

pub fn save_token(store: &impl SessionStore, token: &str) {
    store.set(StorageArea::Local, STORAGE_TOKEN, token);
}

pub fn save_profile(store: &impl SessionStore, profile: &UserProfile) -> Result<(), serde_json::Error> {
    let json = serde_json::to_string(profile)?;
    store.set(StorageArea::Local, STORAGE_USER, &json);
    Ok(())
}

/// Stored profile, if any. An unreadable entry is logged and ignored.
pub fn load_profile(store: &impl SessionStore) -> Option<UserProfile> {
    let json = store.get(StorageArea::Local, STORAGE_USER)?;
    match serde_json::from_str(&json) {
        Ok(profile) => Some(profile),
        Err(err) => {
            log::error!("load_profile: {err}");
            None
        }
    }
}

/// Drops the persisted profile and token. Nothing is revoked server-side.
pub fn clear(store: &impl SessionStore) {
    store.remove(StorageArea::Local, STORAGE_USER);
    store.remove(StorageArea::Local, STORAGE_TOKEN);
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("local"), Some("session"), Some("cookie"), Some("local"))]
    #[case(None, Some("session"), Some("cookie"), Some("session"))]
    #[case(Some(""), Some("session"), None, Some("session"))]
    #[case(None, None, Some("cookie"), Some("cookie"))]
    #[case(Some(""), Some(""), Some(""), None)]
    #[case(None, None, None, None)]
    fn token_lookup_order(
        #[case] local: Option<&str>,
        #[case] session: Option<&str>,
        #[case] cookie: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let store = MemoryStore::new();
        for (area, value) in [(StorageArea::Local, local), (StorageArea::Session, session), (StorageArea::Cookie, cookie)] {
            if let Some(value) = value {
                store.set(area, STORAGE_TOKEN, value);
            }
        }
        assert_eq!(resolve_token(&store).as_deref(), expected);
    }

    #[test]
    fn profile_round_trips_through_store() {
        let store = MemoryStore::new();
        let profile = UserProfile { name: "Ada".into(), picture: "p.png".into(), ..UserProfile::default() };
        save_profile(&store, &profile).unwrap();
        assert_eq!(load_profile(&store), Some(profile));
    }

    #[test]
    fn broken_profile_is_ignored() {
        let store = MemoryStore::new().with(StorageArea::Local, STORAGE_USER, "{not json");
        assert_eq!(load_profile(&store), None);
    }

    #[test]
    fn clear_removes_profile_and_token() {
        let store = MemoryStore::new();
        save_token(&store, "t");
        save_profile(&store, &UserProfile::default()).unwrap();
        clear(&store);
        assert!(store.is_empty());
    }
}
