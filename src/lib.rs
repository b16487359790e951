//! # keyscout
//!
//! Content-based discovery and classification of SSH key material.
//!
//! Given a list of candidate file paths, [`discover_keys`] classifies each
//! file as an RSA or Ed25519 public key, private key, or neither — by
//! parsing its content, never by trusting its name — and reconciles the
//! findings into [`KeyEntry`] values: standalone keys, or pairs matched via
//! the `<private>.pub` naming convention.
//!
//! The crate reads key material but performs no cryptography: encrypted
//! private keys are reported as password-protected rather than decrypted,
//! key material is never validated, and fingerprinting is left to the
//! caller through [`KeyEntry::with_digest_content`].

pub mod entry;
pub mod partition;
pub mod pem;
pub mod scan;

pub(crate) mod ssh;

pub use entry::{Algorithm, KeyEntry, KeyType, PrivateKeyInfo, PublicKeyInfo};
pub use scan::discover_keys;
