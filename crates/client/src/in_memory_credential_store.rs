use std::sync::{Mutex, PoisonError};

use wayfarer_application::CredentialStore;

/// Credential store that lives only as long as the client.
///
/// The default for embedders that manage persistence themselves or do
/// not want the token written to disk.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use wayfarer_application::CredentialStore;

    use super::InMemoryCredentialStore;

    #[test]
    fn store_round_trips_and_clears() {
        let store = InMemoryCredentialStore::new();
        assert!(store.load().is_none());

        store.store("jwt-1");
        assert_eq!(store.load().as_deref(), Some("jwt-1"));

        store.store("jwt-2");
        assert_eq!(store.load().as_deref(), Some("jwt-2"));

        store.clear();
        assert!(store.load().is_none());
    }
}
