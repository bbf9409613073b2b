//! Store module — discovery of secrets inside a password store.
//!
//! This module provides:
//! - The `SecretId` type naming one secret by group and title (`secret_id`)
//! - A lazy walker over the store's directory tree (`walker`)

pub mod secret_id;
pub mod walker;

// Re-export the most commonly used items.
pub use secret_id::SecretId;
pub use walker::{walk_store, SecretWalker};
