use std::str::FromStr;

use base64::engine::general_purpose;
use base64::Engine as _;
use thiserror::Error;

use crate::ssh::key_size::rsa_key_size_bits;
use crate::ssh::key_type;

#[derive(Debug, Error)]
pub enum SshPublicKeyError {
    #[error("not enough fields in the public key line")]
    NotEnoughFields,
    #[error(transparent)]
    Base64DecodeError(#[from] base64::DecodeError),
}

/// A parsed one-line OpenSSH public key: `<algorithm> <base64 blob>
/// [comment]`. The source path is attached later, by the classifier that
/// read the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) algorithm: String,
    pub(crate) key: Vec<u8>,
    pub(crate) comment: String,
    pub(crate) size: usize,
    pub(crate) path: String,
}

impl PublicKey {
    pub(crate) fn is_algorithm(&self, algorithm: &str) -> bool {
        self.algorithm == algorithm
    }
}

impl FromStr for PublicKey {
    type Err = SshPublicKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = split_key_fields(s);
        if fields.len() < 2 {
            return Err(SshPublicKeyError::NotEnoughFields);
        }

        let algorithm = fields[0].to_owned();
        let key = general_purpose::STANDARD.decode(fields[1])?;
        let comment = fields.get(2).copied().unwrap_or_default().to_owned();

        let size = if algorithm == key_type::RSA {
            rsa_key_size_bits(&key)
        } else {
            0
        };

        Ok(PublicKey {
            algorithm,
            key,
            comment,
            size,
            path: String::new(),
        })
    }
}

// At most three fields, separated by whitespace runs; the third keeps its
// internal whitespace so comments may contain spaces.
fn split_key_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::with_capacity(3);
    let mut rest = line.trim();

    for _ in 0..2 {
        match rest.find(char::is_whitespace) {
            Some(end) => {
                fields.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => break,
        }
    }
    if !rest.is_empty() {
        fields.push(rest);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssh::test_keys;
    use pretty_assertions::assert_eq;

    #[test]
    fn an_empty_line_is_not_a_public_key() {
        assert!(matches!(
            "".parse::<PublicKey>(),
            Err(SshPublicKeyError::NotEnoughFields)
        ));
    }

    #[test]
    fn a_single_field_is_not_a_public_key() {
        assert!(matches!(
            "ssh-rsa".parse::<PublicKey>(),
            Err(SshPublicKeyError::NotEnoughFields)
        ));
    }

    #[test]
    fn a_line_without_a_comment_parses_with_an_empty_one() {
        let key: PublicKey = "ssh-rsa AAAA".parse().unwrap();

        assert_eq!("ssh-rsa", key.algorithm);
        assert_eq!(vec![0, 0, 0], key.key);
        assert_eq!("", key.comment);
        assert_eq!("", key.path);
    }

    #[test]
    fn a_comment_may_contain_whitespace() {
        let key: PublicKey = "ssh-rsa AAAA my work laptop".parse().unwrap();

        assert_eq!("my work laptop", key.comment);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let key: PublicKey = "  ssh-rsa AAAA batman@debian\n".parse().unwrap();

        assert_eq!("ssh-rsa", key.algorithm);
        assert_eq!("batman@debian", key.comment);
    }

    #[test]
    fn an_undecodable_blob_is_not_a_public_key() {
        assert!(matches!(
            "ssh-rsa not!base64 comment".parse::<PublicKey>(),
            Err(SshPublicKeyError::Base64DecodeError(_))
        ));
    }

    #[test]
    fn decode_rsa_2048_public_key() {
        let key: PublicKey = test_keys::RSA_2048_PUBLIC_KEY.parse().unwrap();

        assert_eq!("ssh-rsa", key.algorithm);
        assert_eq!("test2@example.com", key.comment);
        assert_eq!(2048, key.size);
    }

    #[test]
    fn decode_rsa_4096_public_key() {
        let key: PublicKey = test_keys::RSA_4096_PUBLIC_KEY.parse().unwrap();

        assert_eq!("ssh-rsa", key.algorithm);
        assert_eq!("test@example.com", key.comment);
        assert_eq!(4096, key.size);
    }

    #[test]
    fn decode_ed25519_public_key() {
        let key: PublicKey = test_keys::ED25519_PUBLIC_KEY.parse().unwrap();

        assert_eq!("ssh-ed25519", key.algorithm);
        assert_eq!("fausto@CAD", key.comment);
        assert_eq!(0, key.size);
    }

    #[test]
    fn a_garbage_blob_does_not_invalidate_an_rsa_key_only_its_size() {
        // "AAAA" decodes to three zero bytes, which is no RSA structure
        let key: PublicKey = "ssh-rsa AAAA robin@debian".parse().unwrap();

        assert_eq!(0, key.size);
    }
}
