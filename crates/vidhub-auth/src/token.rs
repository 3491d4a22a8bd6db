//! Opaque session tokens.
//!
//! The raw token only ever lives in the browser cookie; the database keeps
//! its SHA-256 digest.

use rand::RngExt;
use sha2::{Digest, Sha256};

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a session token in characters.
pub const TOKEN_LENGTH: usize = 48;

/// Generate a random alphanumeric string of the given length.
pub fn generate_secret(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generate a fresh session token.
pub fn generate_session_token() -> String {
    generate_secret(TOKEN_LENGTH)
}

/// Hex-encoded SHA-256 digest of a token.
pub fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
