//! Core types and operations.
//!
//! - [`algorithm`] - Supported SSH key algorithms and their stanza labels
//! - [`error`] - Error types
//! - [`stanza`] - The stanza record and its text encoding
//! - [`types`] - File keys, typed SSH keys, recipients and identities
//! - [`operations`] - Fingerprints, key derivation and per-family wrapping

pub mod algorithm;
pub mod error;
pub mod operations;
pub(crate) mod ssh;
pub mod stanza;
pub mod types;

// Re-export commonly used items
pub use algorithm::KeyAlgorithm;
pub use error::{SshKemError, SshKemResult};
