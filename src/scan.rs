use tracing::debug;

use crate::entry::{KeyEntry, PrivateKeyInfo, PublicKeyInfo};
use crate::partition::partition_key_entries;
use crate::ssh::classifier;

/// Runs every content classifier over the candidate paths and reconciles
/// the findings into key entries. File names are never trusted; a candidate
/// only counts as a key when its content parses as one. Where the paths
/// come from is the caller's business.
pub fn discover_keys<S: AsRef<str>>(paths: &[S]) -> Vec<KeyEntry> {
    let privates = private_key_infos_from(paths);
    let publics = public_key_infos_from(paths);

    debug!(
        candidates = paths.len(),
        privates = privates.len(),
        publics = publics.len(),
        "classified candidate files"
    );

    partition_key_entries(privates, publics)
}

fn private_key_infos_from<S: AsRef<str>>(paths: &[S]) -> Vec<PrivateKeyInfo> {
    let mut records = classifier::rsa_private_keys_from(paths);
    records.extend(classifier::ed25519_private_keys_from(paths));

    records.into_iter().filter_map(PrivateKeyInfo::from_record).collect()
}

fn public_key_infos_from<S: AsRef<str>>(paths: &[S]) -> Vec<PublicKeyInfo> {
    let mut records = classifier::rsa_public_keys_from(paths);
    records.extend(classifier::ed25519_public_keys_from(paths));

    records.into_iter().filter_map(PublicKeyInfo::from_record).collect()
}
