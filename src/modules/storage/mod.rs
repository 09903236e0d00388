//! Storage module for file management
//!
//! Provides a local-directory storage client that writes generated files
//! without ever replacing existing ones.

mod local_storage;

pub use local_storage::LocalStorage;
