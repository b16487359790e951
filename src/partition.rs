use std::collections::HashMap;

use crate::entry::{KeyEntry, PrivateKeyInfo, PublicKeyInfo};

/// Reconciles independently-found private and public keys into entries.
/// Pairing is a filename convention: a private key at `path` claims the
/// public key at `path.pub`, at most once. Paired and standalone private
/// entries keep the private input order; leftover public entries follow in
/// no defined order.
pub fn partition_key_entries(privates: Vec<PrivateKeyInfo>, publics: Vec<PublicKeyInfo>) -> Vec<KeyEntry> {
    let mut public_by_path: HashMap<String, PublicKeyInfo> =
        publics.into_iter().map(|public| (public.path().to_owned(), public)).collect();

    let mut entries = Vec::new();
    for private in privates {
        let candidate = format!("{}.pub", private.path());
        match public_by_path.remove(&candidate) {
            Some(public) => entries.push(KeyEntry::Pair { private, public }),
            None => entries.push(KeyEntry::Private(private)),
        }
    }

    entries.extend(public_by_path.into_values().map(KeyEntry::Public));
    entries
}
