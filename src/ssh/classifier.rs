//! Content classifiers: a candidate file matches when its full content
//! parses as the wanted format *and* names the wanted algorithm. Unreadable
//! files and parse failures are simply not matches; a failed candidate never
//! aborts the scan of the remaining ones.

use std::fs;

use tracing::debug;

use crate::ssh::key_type;
use crate::ssh::private_key::PrivateKey;
use crate::ssh::public_key::PublicKey;

pub(crate) fn rsa_public_keys_from<S: AsRef<str>>(paths: &[S]) -> Vec<PublicKey> {
    public_keys_with_algorithm(paths, key_type::RSA)
}

pub(crate) fn ed25519_public_keys_from<S: AsRef<str>>(paths: &[S]) -> Vec<PublicKey> {
    public_keys_with_algorithm(paths, key_type::ED25519)
}

pub(crate) fn rsa_private_keys_from<S: AsRef<str>>(paths: &[S]) -> Vec<PrivateKey> {
    private_keys_with_algorithm(paths, key_type::RSA)
}

pub(crate) fn ed25519_private_keys_from<S: AsRef<str>>(paths: &[S]) -> Vec<PrivateKey> {
    private_keys_with_algorithm(paths, key_type::ED25519)
}

fn public_keys_with_algorithm<S: AsRef<str>>(paths: &[S], algorithm: &str) -> Vec<PublicKey> {
    paths
        .iter()
        .filter_map(|path| public_key_in_file(path.as_ref(), algorithm))
        .collect()
}

fn private_keys_with_algorithm<S: AsRef<str>>(paths: &[S], algorithm: &str) -> Vec<PrivateKey> {
    paths
        .iter()
        .filter_map(|path| private_key_in_file(path.as_ref(), algorithm))
        .collect()
}

fn public_key_in_file(path: &str, algorithm: &str) -> Option<PublicKey> {
    let content = readable_file_content(path)?;
    let key: PublicKey = content.parse().ok()?;
    if !key.is_algorithm(algorithm) {
        return None;
    }

    Some(PublicKey {
        path: path.to_owned(),
        ..key
    })
}

fn private_key_in_file(path: &str, algorithm: &str) -> Option<PrivateKey> {
    let content = readable_file_content(path)?;
    let key: PrivateKey = content.parse().ok()?;
    if !key.is_algorithm(algorithm) {
        return None;
    }

    Some(PrivateKey {
        path: path.to_owned(),
        ..key
    })
}

fn readable_file_content(path: &str) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(error) => {
            debug!(path, %error, "skipping a candidate file that could not be read");
            None
        }
    }
}
