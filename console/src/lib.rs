//! Lending users console.
//!
//! A paginated, filterable and searchable view over a persisted collection
//! of borrower records, with status changes that invalidate cached queries.
//! The crate follows a hexagonal layout: [`domain`] holds the types,
//! services and ports; [`outbound`] and [`inbound`] hold adapters;
//! [`state`] wires them together from [`config`].

pub mod config;
pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod outbound;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::ConsoleSettings;
pub use state::ConsoleState;
