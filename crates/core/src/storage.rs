//! Key-value storage for the session token and cached display fields

use crate::config::StorageKeys;
use crate::error::CoreResult;
use crate::user::CurrentUser;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key-value store holding the bearer token and cached profile fields.
///
/// Implementations use interior mutability, mirroring browser storage where a
/// shared handle can be written from anywhere.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    fn remove(&self, key: &str);

    /// The stored bearer token, if any. Empty strings count as absent.
    fn token(&self) -> Option<String> {
        self.get(StorageKeys::TOKEN).filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) -> CoreResult<()> {
        self.set(StorageKeys::TOKEN, token)
    }

    /// Remove the token and every cached display field
    fn clear_session(&self) {
        self.remove(StorageKeys::TOKEN);
        self.remove(StorageKeys::USERNAME);
        self.remove(StorageKeys::USER_EMAIL);
    }

    /// Persist the display fields of a freshly fetched profile
    fn remember_profile(&self, user: &CurrentUser) -> CoreResult<()> {
        if let Some(username) = &user.username {
            self.set(StorageKeys::USERNAME, username)?;
        }
        if let Some(email) = &user.email {
            self.set(StorageKeys::USER_EMAIL, email)?;
        }
        Ok(())
    }

    /// Last-known-good profile built from the cached display fields
    fn cached_profile(&self) -> Option<CurrentUser> {
        let username = self.get(StorageKeys::USERNAME);
        let email = self.get(StorageKeys::USER_EMAIL);

        if username.is_none() && email.is_none() {
            return None;
        }

        Some(CurrentUser {
            username,
            email,
            ..CurrentUser::default()
        })
    }
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

impl<T: TokenStore + ?Sized> TokenStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory store used in tests and when browser storage is unavailable
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(StorageKeys::TOKEN.to_string(), token.to_string());
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
