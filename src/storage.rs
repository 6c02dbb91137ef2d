//! Session persistence.
//!
//! The session lives in two local storage entries: `token` holds the opaque
//! bearer token and `user` holds the JSON encoded [`User`]. Both must be
//! present for a session to be restored.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::logging::warn;

use crate::error::StorageError;
use crate::models::user::{Session, User};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// String key/value storage with the semantics of `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Off the browser (server rendering, native tests)
/// every read misses and every write fails with [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    #[cfg(target_arch = "wasm32")]
    fn local_storage() -> Option<web_sys::Storage> {
        gloo_utils::window().local_storage().ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn local_storage() -> Option<web_sys::Storage> {
        None
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write { key: key.to_string() })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Reads the persisted session. Missing or empty entries, or a `user` entry
/// that does not decode, mean there is no session.
pub fn load_session(store: &impl KeyValueStore) -> Option<Session> {
    let token = store.get(TOKEN_KEY).filter(|token| !token.is_empty())?;
    let raw_user = store.get(USER_KEY).filter(|user| !user.is_empty())?;
    match serde_json::from_str::<User>(&raw_user) {
        Ok(user) => Some(Session { token, user }),
        Err(err) => {
            warn!("[SESSION] Ignoring unreadable persisted user: {}", err);
            None
        }
    }
}

pub fn persist_session(store: &impl KeyValueStore, session: &Session) -> Result<(), StorageError> {
    let user = serde_json::to_string(&session.user)?;
    store.set(TOKEN_KEY, &session.token)?;
    store.set(USER_KEY, &user)
}

pub fn clear_session(store: &impl KeyValueStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}
