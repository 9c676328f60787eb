//! Deterministic example user data for the users console.
//!
//! This crate generates believable, reproducible lending-platform user
//! records from a JSON seed registry. Its output types are independent of the
//! console's domain types so that the console can depend on it without a
//! cycle.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed registries (organizations plus named seeds) from JSON
//! - Deterministic user generation using named seeds
//! - Username and phone number validation
//! - Atomic output of a generated dataset
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_users};
//!
//! let json = r#"{
//!     "version": 1,
//!     "organizations": ["Lendsqr", "Irorun"],
//!     "seeds": [{"name": "test-seed", "seed": 42, "userCount": 3}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let users = generate_example_users(&registry, seed_def).expect("generation succeeds");
//!
//! assert_eq!(users.len(), 3);
//! ```

mod atomic_io;
mod error;
mod generator;
mod output;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, OutputError, RegistryError};
pub use generator::generate_example_users;
pub use output::{dataset_to_json, write_dataset};
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::{
    AccountSummarySeed, EducationAndEmploymentSeed, ExampleUserSeed, GuarantorSeed, ProfileSeed,
    SocialsSeed, StatusSeed,
};
pub use validation::{
    PHONE_NUMBER_LEN, USERNAME_MAX, USERNAME_MIN, is_valid_phone_number, is_valid_username,
};
