//! Port for the string key-value storage that persists console state.
//!
//! Mirrors the browser storage the console was designed around: named
//! entries holding whole serialised values, read and written in one piece.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by key-value storage adapters.
    pub enum KeyValueStorageError {
        /// Key contains characters the adapter cannot store.
        InvalidKey { key: String } => "storage key {key:?} is not allowed",
        /// Reading or writing the entry failed.
        Io { key: String, message: String } => "storage entry {key} failed: {message}",
    }
}

/// Named string entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read an entry; `None` when it has never been written or was removed.
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStorageError>;

    /// Replace an entry as a whole.
    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStorageError>;

    /// Delete an entry. Removing a missing entry succeeds.
    async fn remove(&self, key: &str) -> Result<(), KeyValueStorageError>;
}

/// Keys are limited to ASCII alphanumerics, `-` and `_` so every adapter can
/// use them verbatim as file names.
pub fn is_valid_storage_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("lendsqr-users", true)]
    #[case("lendsqr_authenticated_user", true)]
    #[case("", false)]
    #[case("../escape", false)]
    #[case("with space", false)]
    #[case("nested/key", false)]
    fn storage_keys_are_file_name_safe(#[case] key: &str, #[case] expected: bool) {
        assert_eq!(is_valid_storage_key(key), expected);
    }

    #[test]
    fn errors_name_the_key() {
        let err = KeyValueStorageError::io("lendsqr-users", "disk full");
        assert_eq!(err.to_string(), "storage entry lendsqr-users failed: disk full");
    }
}
