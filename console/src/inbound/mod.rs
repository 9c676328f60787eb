//! Inbound adapters that drive the domain.

pub mod search_input;

pub use search_input::{DEFAULT_DEBOUNCE, SearchInput, SearchInputHandle, search_input};
