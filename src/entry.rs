use crate::ssh::key_type;
use crate::ssh::private_key::PrivateKey;
use crate::ssh::public_key::PublicKey;

/// Key algorithms surfaced to consumers. `Dsa` is part of the display
/// vocabulary but no content classifier currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Rsa,
    Ed25519,
    Dsa,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Rsa => "RSA",
            Algorithm::Ed25519 => "Ed25519",
            Algorithm::Dsa => "DSA",
        }
    }

    /// Whether the algorithm has a meaningful bit size. Ed25519 keys are all
    /// the same size, so none is reported for them.
    pub fn has_key_size(self) -> bool {
        matches!(self, Algorithm::Rsa)
    }

    pub(crate) fn from_ssh_name(name: &str) -> Option<Self> {
        match name {
            key_type::RSA => Some(Algorithm::Rsa),
            key_type::ED25519 => Some(Algorithm::Ed25519),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    Public,
    Private,
    Pair,
}

/// What a discovered public key exposes to consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyInfo {
    pub(crate) path: String,
    pub(crate) key: Vec<u8>,
    pub(crate) size: usize,
    pub(crate) algorithm: Algorithm,
    pub(crate) user_id: String,
}

impl PublicKeyInfo {
    pub(crate) fn from_record(key: PublicKey) -> Option<Self> {
        let algorithm = Algorithm::from_ssh_name(&key.algorithm)?;

        Some(PublicKeyInfo {
            path: key.path,
            key: key.key,
            size: key.size,
            algorithm,
            user_id: key.comment,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// What a discovered private key exposes to consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKeyInfo {
    pub(crate) path: String,
    pub(crate) password_protected: bool,
    pub(crate) size: usize,
    pub(crate) algorithm: Algorithm,
}

impl PrivateKeyInfo {
    pub(crate) fn from_record(key: PrivateKey) -> Option<Self> {
        let algorithm = Algorithm::from_ssh_name(&key.algorithm)?;

        Some(PrivateKeyInfo {
            path: key.path,
            password_protected: key.password_protected,
            size: key.size,
            algorithm,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_password_protected(&self) -> bool {
        self.password_protected
    }
}

/// A discovered key entry. A pair owns both halves outright, so a pair with
/// a missing half is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEntry {
    Public(PublicKeyInfo),
    Private(PrivateKeyInfo),
    Pair {
        private: PrivateKeyInfo,
        public: PublicKeyInfo,
    },
}

impl KeyEntry {
    /// Every path backing this entry; private before public for pairs. A
    /// path equal to the empty string contributes nothing.
    pub fn locations(&self) -> Vec<&str> {
        match self {
            KeyEntry::Public(public) => location_of(&public.path),
            KeyEntry::Private(private) => location_of(&private.path),
            KeyEntry::Pair { private, public } => {
                let mut locations = location_of(&private.path);
                locations.extend(location_of(&public.path));
                locations
            }
        }
    }

    pub fn public_key_locations(&self) -> Vec<&str> {
        match self {
            KeyEntry::Public(public) => location_of(&public.path),
            KeyEntry::Private(_) => Vec::new(),
            KeyEntry::Pair { public, .. } => location_of(&public.path),
        }
    }

    pub fn private_key_locations(&self) -> Vec<&str> {
        match self {
            KeyEntry::Public(_) => Vec::new(),
            KeyEntry::Private(private) => location_of(&private.path),
            KeyEntry::Pair { private, .. } => location_of(&private.path),
        }
    }

    pub fn key_type(&self) -> KeyType {
        match self {
            KeyEntry::Public(_) => KeyType::Public,
            KeyEntry::Private(_) => KeyType::Private,
            KeyEntry::Pair { .. } => KeyType::Pair,
        }
    }

    /// Key size in bits; 0 when the algorithm has no meaningful size. Pairs
    /// answer with the public half.
    pub fn size(&self) -> usize {
        match self {
            KeyEntry::Public(public) => public.size,
            KeyEntry::Private(private) => private.size,
            KeyEntry::Pair { public, .. } => public.size,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            KeyEntry::Public(public) => public.algorithm,
            KeyEntry::Private(private) => private.algorithm,
            KeyEntry::Pair { public, .. } => public.algorithm,
        }
    }

    /// The comment of the public key; `None` for private entries.
    pub fn user_id(&self) -> Option<&str> {
        match self {
            KeyEntry::Public(public) => Some(&public.user_id),
            KeyEntry::Private(_) => None,
            KeyEntry::Pair { public, .. } => Some(&public.user_id),
        }
    }

    /// Whether the private half needs a passphrase; `None` for public
    /// entries.
    pub fn is_password_protected(&self) -> Option<bool> {
        match self {
            KeyEntry::Public(_) => None,
            KeyEntry::Private(private) => Some(private.password_protected),
            KeyEntry::Pair { private, .. } => Some(private.password_protected),
        }
    }

    /// Applies a caller-supplied transform (typically a hash) to the raw
    /// public key material; `None` for private entries. No digest is
    /// computed by this crate itself.
    pub fn with_digest_content<F>(&self, f: F) -> Option<Vec<u8>>
    where
        F: FnOnce(&[u8]) -> Vec<u8>,
    {
        match self {
            KeyEntry::Public(public) => Some(f(&public.key)),
            KeyEntry::Private(_) => None,
            KeyEntry::Pair { public, .. } => Some(f(&public.key)),
        }
    }
}

fn location_of(path: &str) -> Vec<&str> {
    if path.is_empty() {
        Vec::new()
    } else {
        vec![path]
    }
}
