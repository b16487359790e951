use crate::ssh::decode::SshReadExt;
use crate::ssh::key_type;

/// Bit size of the modulus in an RSA public-key blob (algorithm name,
/// exponent, modulus, each length-prefixed). Yields 0 for anything that is
/// not a readable RSA blob, so a failed inference never invalidates the key
/// it came from.
pub(crate) fn rsa_key_size_bits(blob: &[u8]) -> usize {
    rsa_modulus_len(blob).map_or(0, |len| canonical_modulus_len(len) * 8)
}

fn rsa_modulus_len(mut blob: &[u8]) -> Option<usize> {
    let algorithm = blob.read_ssh_string().ok()?;
    if algorithm != key_type::RSA {
        return None;
    }

    blob.read_ssh_bytes().ok()?; // exponent
    let modulus = blob.read_ssh_bytes().ok()?;

    Some(modulus.len())
}

// The wire encoding prepends one zero byte to a modulus whose most
// significant bit is set, so known sizes show up off by one in either
// direction. Unknown lengths pass through untouched.
fn canonical_modulus_len(len: usize) -> usize {
    match len {
        127..=129 => 128,
        255..=257 => 256,
        383..=385 => 384,
        511..=513 => 512,
        other => other,
    }
}
