//! SHA-256 hex digest helper backing build identity.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_64_hex_chars_and_deterministic() {
        let digest = sha256_hex(b"1577836800i930029");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, sha256_hex(b"1577836800i930029"));
    }

    #[test]
    fn different_input_different_digest() {
        assert_ne!(sha256_hex(b"a"), sha256_hex(b"b"));
    }
}
