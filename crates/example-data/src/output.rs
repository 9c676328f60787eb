//! Writing a generated dataset to disk.

use camino::Utf8Path;
use cap_std::fs::Dir;

use crate::atomic_io::write_atomic;
use crate::error::OutputError;
use crate::seed::ExampleUserSeed;

/// Renders users as a pretty-printed JSON array with a trailing newline.
///
/// # Errors
///
/// Returns [`OutputError::Serialise`] if serialisation fails.
pub fn dataset_to_json(users: &[ExampleUserSeed]) -> Result<String, OutputError> {
    let mut json = serde_json::to_string_pretty(users).map_err(|err| OutputError::Serialise {
        message: err.to_string(),
    })?;
    json.push('\n');
    Ok(json)
}

/// Atomically writes `users` as JSON to `file_name` inside `dir`.
///
/// # Errors
///
/// Returns [`OutputError`] if serialisation or the write fails.
pub fn write_dataset(
    dir: &Dir,
    file_name: &Utf8Path,
    users: &[ExampleUserSeed],
) -> Result<(), OutputError> {
    let json = dataset_to_json(users)?;
    write_atomic(dir, file_name, &json)
}
