//! Parsing of the OpenSSH on-disk key formats: the one-line public key
//! format and the `openssh-key-v1` private-key container, plus the content
//! classifiers built on top of them.

pub mod private_key;
pub mod public_key;

pub(crate) mod classifier;
pub(crate) mod decode;
pub(crate) mod key_size;

#[cfg(test)]
pub(crate) mod test_keys;

/// Canonical algorithm names as they appear on the wire.
pub(crate) mod key_type {
    pub const RSA: &str = "ssh-rsa";
    pub const ED25519: &str = "ssh-ed25519";
}
