//! Outbound adapters implementing the domain ports.

pub mod cache;
pub mod storage;
