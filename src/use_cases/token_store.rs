use std::sync::{Mutex, PoisonError};

use crate::domain::TokenStorage;

// Owns the current auth token and keeps it mirrored in durable storage.
pub struct TokenStore {
    storage: Box<dyn TokenStorage>,
    token: Mutex<Option<String>>,
}

impl TokenStore {
    // Initialize the in-memory token from whatever the storage already holds.
    pub fn load(storage: impl TokenStorage + 'static) -> Self {
        let token = storage.load().unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to read persisted token.");
            None
        });

        Self {
            storage: Box::new(storage),
            token: Mutex::new(token),
        }
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        if let Err(error) = self.storage.save(&token) {
            tracing::warn!(%error, "failed to persist token.");
        }
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    pub fn clear_token(&self) {
        if let Err(error) = self.storage.remove() {
            tracing::warn!(%error, "failed to remove persisted token.");
        }
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
