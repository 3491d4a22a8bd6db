//! Shared-secret verification for machine clients.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// A configured shared secret, compared in constant time.
///
/// Both sides are reduced to SHA-256 digests first so the comparison does
/// not leak the secret's length. An unconfigured secret rejects everything.
#[derive(Clone)]
pub struct SharedSecret {
    digest: Option<[u8; 32]>,
}

impl SharedSecret {
    /// Build from the configured value. `None` or an empty string disables access.
    pub fn new(secret: Option<&str>) -> Self {
        let digest = secret
            .filter(|s| !s.is_empty())
            .map(|s| Sha256::digest(s.as_bytes()).into());
        Self { digest }
    }

    /// Whether a secret is configured at all.
    pub fn is_configured(&self) -> bool {
        self.digest.is_some()
    }

    /// Check a presented value.
    pub fn verify(&self, presented: Option<&str>) -> bool {
        let (Some(expected), Some(presented)) = (self.digest.as_ref(), presented) else {
            return false;
        };
        let presented: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
        expected.ct_eq(&presented).into()
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecret")
            .field("configured", &self.is_configured())
            .finish()
    }
}
