//! Outbound adapters implementing domain ports.
//!
//! - **memory**: the in-process entity store and its repository adapters
//! - **security**: password hashing
//!
//! Adapters translate between domain types and their backing representation.
//! They contain no business rules beyond the storage-level uniqueness checks.

pub mod memory;
pub mod security;
