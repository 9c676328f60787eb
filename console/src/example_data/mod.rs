//! Bundled default dataset served when the record store is empty.

mod config;
mod dataset;

pub use config::ExampleDataSettings;
pub use dataset::{DatasetError, convert_seed_user, load_default_users};
