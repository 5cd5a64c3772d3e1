use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `password`.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Checks `password` against a digest from [`hash_password`].
pub fn verify_password(password: &str, digest: &str) -> bool {
    hash_password(password).eq_ignore_ascii_case(digest.trim())
}
