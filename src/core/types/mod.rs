//! Key-wrapping types.
//!
//! - [`FileKey`] - The 16-byte symmetric key being wrapped
//! - [`PublicKeyMaterial`] / [`PrivateKeyMaterial`] - Typed SSH keys
//! - [`Recipient`] - Wraps file keys to an SSH public key
//! - [`Identity`] - Unwraps stanzas with an SSH private key

mod file_key;
mod identity;
mod key;
mod recipient;

pub use file_key::{FileKey, FILE_KEY_SIZE};
pub use identity::Identity;
#[cfg(feature = "ecdsa")]
pub use key::{EcdsaPublicKey, EcdsaSecretKey};
pub use key::{PrivateKeyMaterial, PublicKeyMaterial};
pub use recipient::Recipient;
