//! File-key wrapping with existing SSH key pairs.
//!
//! A *recipient* (an SSH public key) wraps a freshly generated 16-byte file
//! key into one or more *stanzas*. The matching *identity* (the SSH private
//! key) finds the stanza addressed to it and recovers the file key. Stanzas
//! carry a short fingerprint of the public key so identities can skip
//! stanzas meant for someone else without attempting decryption.
//!
//! # Quick Start
//!
//! ```rust
//! use ed25519_dalek::SigningKey;
//! use sshkem::{parse_stanzas, FileKey, Identity};
//!
//! let identity = Identity::ed25519(SigningKey::from_bytes(&[0x07; 32]))?;
//! let recipient = identity.recipient();
//!
//! let file_key = FileKey::generate()?;
//! let stanzas = recipient.wrap(&file_key)?;
//!
//! // Stanzas have a text form for embedding in a file header
//! let text: String = stanzas.iter().map(ToString::to_string).collect();
//! let parsed = parse_stanzas(&text)?;
//!
//! assert_eq!(identity.unwrap(&parsed)?, file_key);
//! # Ok::<(), sshkem::SshKemError>(())
//! ```
//!
//! # Key Families
//!
//! | Label | Key | Stanza args | Body |
//! |-------|-----|-------------|------|
//! | `ssh-rsa` | RSA, 2048 bits or more | `{fp}` | RSA-OAEP-SHA256 ciphertext |
//! | `ssh-ed25519` | Ed25519 | `{fp} {ephemeral}` | ChaCha20-Poly1305 over X25519 |
//! | `ecdsa-sha2-nistp256` | ECDSA P-256 | `{fp} {ephemeral}` | ChaCha20-Poly1305 over ECDH |
//! | `ecdsa-sha2-nistp384` | ECDSA P-384 | `{fp} {ephemeral}` | ChaCha20-Poly1305 over ECDH |
//! | `ecdsa-sha2-nistp521` | ECDSA P-521 | `{fp} {ephemeral}` | ChaCha20-Poly1305 over ECDH |
//!
//! `{fp}` is the first four bytes of SHA-256 over the SSH wire encoding of the
//! public key, base64 without padding. Every derivation is bound to the
//! string `sshkem.v1/{label} {fp}`.
//!
//! # Features
//!
//! Each key family sits behind a feature; all are enabled by default.
//!
//! ```toml
//! [dependencies]
//! sshkem = { version = "0.1", default-features = false, features = ["ed25519"] }
//! ```
//!
//! # Security
//!
//! - File keys and derived wrap keys are zeroized on drop
//! - Debug output redacts secret material
//! - File keys compare in constant time
//! - Unwrap failures do not say why decryption failed
//! - No unsafe code
//!
//! ## RSA
//!
//! **The `rsa` crate is vulnerable to [RUSTSEC-2023-0071] (Marvin Attack),
//! a timing side-channel attack that could enable private key recovery.**
//! Decryption is blinded, but an attacker who can submit `ssh-rsa` stanzas to
//! an RSA identity and time the result may still learn the key. Prefer
//! Ed25519 or ECDSA keys. The build emits a warning while the `rsa` feature is
//! enabled; build with `default-features = false` to exclude it.
//!
//! [RUSTSEC-2023-0071]: https://rustsec.org/advisories/RUSTSEC-2023-0071
//!
//! # Modules
//!
//! - [`core`] - Core types and operations

#[cfg(not(any(feature = "rsa", feature = "ed25519", feature = "ecdsa")))]
compile_error!("at least one key family feature must be enabled: `rsa`, `ed25519` or `ecdsa`");

pub mod core;

// Re-export commonly used items at crate root
pub use core::algorithm::KeyAlgorithm;
pub use core::error::{SshKemError, SshKemResult};
pub use core::operations::fingerprint::Fingerprint;
pub use core::stanza::{parse_stanzas, Stanza};
pub use core::types::{FileKey, Identity, PrivateKeyMaterial, PublicKeyMaterial, Recipient, FILE_KEY_SIZE};

#[cfg(feature = "ecdsa")]
pub use core::types::{EcdsaPublicKey, EcdsaSecretKey};
