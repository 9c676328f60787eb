//! Settings selecting the console's default dataset.
//!
//! The records served while storage is empty are generated from a named seed
//! in the registry. Values come from `EXAMPLE_DATA_*` environment variables or
//! the configuration file, via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_SEED_NAME: &str = "lendsqr-demo";

fn default_registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("example-data")
        .join("seeds.json")
}

/// Where the default dataset comes from.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Seed name to load from the registry.
    pub seed_name: Option<String>,
    /// Number of users to generate in place of the seed's own `userCount`.
    /// Read from `user_count` in the configuration file. Zero is rejected
    /// when the dataset is built.
    #[ortho_config(file_key = "user_count")]
    pub count: Option<usize>,
    /// Registry file to read instead of the bundled one.
    pub registry_path: Option<PathBuf>,
}

impl ExampleDataSettings {
    /// Configured seed name with surrounding whitespace removed, or the
    /// bundled demo seed.
    pub fn seed_name(&self) -> &str {
        self.seed_name
            .as_deref()
            .map_or(DEFAULT_SEED_NAME, str::trim)
    }

    /// The user count override, if any.
    pub const fn user_count(&self) -> Option<usize> {
        self.count
    }

    /// Configured registry path, or the registry bundled with the crate.
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(default_registry_path)
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_console_settings() -> ExampleDataSettings {
        ExampleDataSettings::load_from_iter([OsString::from("users-console")])
            .expect("example data settings load")
    }

    #[rstest]
    fn unset_environment_selects_the_bundled_demo_seed() {
        let _guard = lock_env([
            ("EXAMPLE_DATA_SEED_NAME", None::<String>),
            ("EXAMPLE_DATA_COUNT", None::<String>),
            ("EXAMPLE_DATA_REGISTRY_PATH", None::<String>),
        ]);

        let settings = load_console_settings();
        assert_eq!(settings.seed_name(), "lendsqr-demo");
        assert_eq!(settings.registry_path(), default_registry_path());
        assert_eq!(settings.user_count(), None);
    }

    #[rstest]
    fn environment_picks_seed_count_and_registry() {
        let _guard = lock_env([
            ("EXAMPLE_DATA_SEED_NAME", Some("lendsqr-small".to_owned())),
            ("EXAMPLE_DATA_COUNT", Some("5".to_owned())),
            (
                "EXAMPLE_DATA_REGISTRY_PATH",
                Some("/tmp/lendsqr_registry.json".to_owned()),
            ),
        ]);

        let settings = load_console_settings();
        assert_eq!(settings.seed_name(), "lendsqr-small");
        assert_eq!(settings.user_count(), Some(5));
        assert_eq!(
            settings.registry_path(),
            PathBuf::from("/tmp/lendsqr_registry.json")
        );
    }

    #[rstest]
    #[case(Some("  lendsqr-small\n"), "lendsqr-small")]
    #[case(Some("   "), "")]
    #[case(None, "lendsqr-demo")]
    fn seed_names_are_trimmed(#[case] configured: Option<&str>, #[case] expected: &str) {
        let settings = ExampleDataSettings {
            seed_name: configured.map(str::to_owned),
            ..ExampleDataSettings::default()
        };
        assert_eq!(settings.seed_name(), expected);
    }
}
