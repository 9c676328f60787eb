//! Signed-in operator marker persisted in key-value storage.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::AuthenticatedUser;
use crate::domain::ports::{KeyValueStorage, KeyValueStorageError, SessionStore, SessionStoreError};

/// Entry whose presence means an operator is signed in.
pub const AUTHENTICATED_USER_STORAGE_KEY: &str = "lendsqr-authenticated-user";

/// [`SessionStore`] over a single key-value entry holding the email.
#[derive(Clone)]
pub struct KeyValueSessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl KeyValueSessionStore {
    /// Keep the session under [`AUTHENTICATED_USER_STORAGE_KEY`] in `storage`.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

fn map_storage_error(error: KeyValueStorageError) -> SessionStoreError {
    SessionStoreError::storage(error.to_string())
}

#[async_trait]
impl SessionStore for KeyValueSessionStore {
    async fn current(&self) -> Result<Option<AuthenticatedUser>, SessionStoreError> {
        let marker = self
            .storage
            .get(AUTHENTICATED_USER_STORAGE_KEY)
            .await
            .map_err(map_storage_error)?;
        Ok(marker.map(AuthenticatedUser::new))
    }

    async fn mark(&self, user: &AuthenticatedUser) -> Result<(), SessionStoreError> {
        self.storage
            .set(AUTHENTICATED_USER_STORAGE_KEY, user.email())
            .await
            .map_err(map_storage_error)
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        self.storage
            .remove(AUTHENTICATED_USER_STORAGE_KEY)
            .await
            .map_err(map_storage_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::storage::InMemoryKeyValueStorage;

    #[tokio::test]
    async fn marker_lifecycle() {
        let storage = Arc::new(InMemoryKeyValueStorage::new());
        let sessions = KeyValueSessionStore::new(storage.clone());
        assert_eq!(sessions.current().await.expect("read"), None);

        let user = AuthenticatedUser::new("test@lendsqr.com");
        sessions.mark(&user).await.expect("mark");
        assert_eq!(sessions.current().await.expect("read"), Some(user));
        assert_eq!(
            storage
                .get(AUTHENTICATED_USER_STORAGE_KEY)
                .await
                .expect("raw read")
                .as_deref(),
            Some("test@lendsqr.com")
        );

        sessions.clear().await.expect("clear");
        sessions.clear().await.expect("clearing twice is fine");
        assert_eq!(sessions.current().await.expect("read"), None);
    }
}
