//! Runtime settings for the users console loaded via OrthoConfig.
//!
//! Every field is optional so that an empty environment yields the defaults
//! the console has always used; the accessors apply the fallbacks.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{DEFAULT_LATENCY, DEFAULT_STALE_TIME};
use crate::inbound::DEFAULT_DEBOUNCE;

/// Console runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_CONSOLE")]
pub struct ConsoleSettings {
    /// Directory holding persisted entries; in-memory storage when absent.
    pub storage_dir: Option<PathBuf>,
    /// Simulated network latency in milliseconds.
    pub latency_ms: Option<u64>,
    /// Search input debounce window in milliseconds.
    pub debounce_ms: Option<u64>,
    /// How long cached query results stay fresh, in seconds.
    pub stale_time_secs: Option<u64>,
}

impl ConsoleSettings {
    /// Configured storage directory, if any.
    pub fn storage_dir(&self) -> Option<&Path> {
        self.storage_dir.as_deref()
    }

    /// Simulated latency applied before every load and mutation.
    pub fn latency(&self) -> Duration {
        self.latency_ms
            .map_or(DEFAULT_LATENCY, Duration::from_millis)
    }

    /// Debounce window for the search input.
    pub fn debounce(&self) -> Duration {
        self.debounce_ms
            .map_or(DEFAULT_DEBOUNCE, Duration::from_millis)
    }

    /// Freshness window for cached query results.
    pub fn stale_time(&self) -> Duration {
        self.stale_time_secs
            .map_or(DEFAULT_STALE_TIME, Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for console settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "USERS_CONSOLE_STORAGE_DIR",
        "USERS_CONSOLE_LATENCY_MS",
        "USERS_CONSOLE_DEBOUNCE_MS",
        "USERS_CONSOLE_STALE_TIME_SECS",
    ];

    fn load() -> ConsoleSettings {
        ConsoleSettings::load_from_iter([OsString::from("users-console")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load();
        assert_eq!(settings.storage_dir(), None);
        assert_eq!(settings.latency(), Duration::from_millis(3000));
        assert_eq!(settings.debounce(), Duration::from_millis(300));
        assert_eq!(settings.stale_time(), Duration::from_secs(300));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USERS_CONSOLE_STORAGE_DIR", Some("/tmp/users-console".to_owned())),
            ("USERS_CONSOLE_LATENCY_MS", Some("0".to_owned())),
            ("USERS_CONSOLE_DEBOUNCE_MS", Some("150".to_owned())),
            ("USERS_CONSOLE_STALE_TIME_SECS", Some("60".to_owned())),
        ]);

        let settings = load();
        assert_eq!(
            settings.storage_dir(),
            Some(Path::new("/tmp/users-console"))
        );
        assert_eq!(settings.latency(), Duration::ZERO);
        assert_eq!(settings.debounce(), Duration::from_millis(150));
        assert_eq!(settings.stale_time(), Duration::from_secs(60));
    }
}
