//! Cipher parameters.

use serde::Deserialize;

/// Modulus used when the caller does not pick one.
pub const DEFAULT_MODULUS: u64 = 104_729;

/// Exclusive upper bound for the blinding factor `k` in `p + k·M`.
pub const DEFAULT_BLINDING_BOUND: u32 = 1000;

/// Construction parameters for [`ModularAdditiveCipher`](crate::ModularAdditiveCipher).
///
/// Only `Deserialize` is derived: the modulus is secret and this crate never writes it out.
#[derive(Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CipherParams {
    /// Plaintext domain is `[0, modulus - 1]`.
    pub modulus: u64,
    /// Blinding factors are drawn from `[0, blinding_bound)`.
    pub blinding_bound: u32,
}

impl CipherParams {
    /// Default blinding bound with a caller-chosen modulus.
    #[must_use]
    pub fn with_modulus(modulus: u64) -> Self {
        Self { modulus, ..Self::default() }
    }
}

impl Default for CipherParams {
    fn default() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
            blinding_bound: DEFAULT_BLINDING_BOUND,
        }
    }
}

impl std::fmt::Debug for CipherParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherParams")
            .field("modulus", &"<redacted>")
            .field("blinding_bound", &self.blinding_bound)
            .finish()
    }
}
