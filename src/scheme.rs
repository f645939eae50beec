//! Encryption & decryption.

use rand::Rng;
use tracing::{debug, trace};

use crate::{
    cipher::{residue, Ciphertext},
    error::{CipherError, Result},
    number::Number,
    params::CipherParams,
};

/// Randomized, additively homomorphic integer cipher keyed by a secret modulus.
///
/// Immutable after construction, so a shared reference can be used from any
/// number of threads.
#[derive(Clone)]
pub struct ModularAdditiveCipher {
    modulus: u64,
    blinding_bound: u32,
}

impl ModularAdditiveCipher {
    /// Cipher over `[0, modulus - 1]` with the default blinding bound.
    ///
    /// # Errors
    /// [`CipherError::InvalidModulus`] unless `modulus` is an integer in `[1, u64::MAX]`.
    pub fn new(modulus: impl Into<Number>) -> Result<Self> {
        let modulus = modulus
            .into()
            .as_integer()
            .and_then(|m| u64::try_from(m).ok())
            .ok_or(CipherError::InvalidModulus)?;
        Self::with_params(CipherParams::with_modulus(modulus))
    }

    /// Cipher from explicit parameters.
    ///
    /// # Errors
    /// [`CipherError::InvalidModulus`] for a zero modulus,
    /// [`CipherError::InvalidBlindingBound`] for a zero blinding bound.
    pub fn with_params(params: CipherParams) -> Result<Self> {
        if params.modulus == 0 {
            return Err(CipherError::InvalidModulus);
        }
        if params.blinding_bound == 0 {
            return Err(CipherError::InvalidBlindingBound);
        }
        debug!(blinding_bound = params.blinding_bound, "cipher initialised");
        Ok(Self {
            modulus: params.modulus,
            blinding_bound: params.blinding_bound,
        })
    }

    /// The secret modulus. This is the only way it leaves the cipher.
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Exclusive upper bound of the blinding factor.
    #[must_use]
    pub fn blinding_bound(&self) -> u32 {
        self.blinding_bound
    }

    /// Encrypt using the thread-local generator.
    ///
    /// # Errors
    /// See [`encrypt_with_rng`](Self::encrypt_with_rng).
    pub fn encrypt(&self, plaintext: impl Into<Number>) -> Result<Ciphertext> {
        self.encrypt_with_rng(plaintext, &mut rand::thread_rng())
    }

    /// Encrypt `p ∈ [0, M-1]` as `p + k·M` with `k` uniform in `[0, blinding_bound)`.
    ///
    /// # Errors
    /// [`CipherError::NotAnInteger`] for fractional, non-finite or non-numeric input,
    /// [`CipherError::OutOfRange`] when the integer is outside the plaintext domain.
    pub fn encrypt_with_rng<R: Rng + ?Sized>(
        &self,
        plaintext: impl Into<Number>,
        rng: &mut R,
    ) -> Result<Ciphertext> {
        let p = plaintext
            .into()
            .as_integer()
            .ok_or(CipherError::NotAnInteger)?;
        if p < 0 || p >= i128::from(self.modulus) {
            return Err(CipherError::OutOfRange { value: p });
        }
        let k = rng.gen_range(0..self.blinding_bound);
        trace!("encrypt");
        // |p + k·M| < 2^96, no overflow possible
        Ok(p + i128::from(k) * i128::from(self.modulus))
    }

    /// Recover the plaintext of any integer ciphertext, negative ones included.
    ///
    /// # Errors
    /// [`CipherError::NotANumber`] when the input is not an integral number.
    pub fn decrypt(&self, ciphertext: impl Into<Number>) -> Result<u64> {
        let c = ciphertext
            .into()
            .as_integer()
            .ok_or(CipherError::NotANumber)?;
        trace!("decrypt");
        Ok(residue(c, self.modulus))
    }

    pub(crate) fn residue(&self, c: Ciphertext) -> u64 {
        residue(c, self.modulus)
    }
}

impl Default for ModularAdditiveCipher {
    fn default() -> Self {
        let params = CipherParams::default();
        Self {
            modulus: params.modulus,
            blinding_bound: params.blinding_bound,
        }
    }
}

impl std::fmt::Debug for ModularAdditiveCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModularAdditiveCipher")
            .field("modulus", &"<redacted>")
            .field("blinding_bound", &self.blinding_bound)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DEFAULT_MODULUS;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_construction_validates_modulus() {
        assert_eq!(ModularAdditiveCipher::new(97).unwrap().modulus(), 97);
        assert_eq!(ModularAdditiveCipher::new(97.0).unwrap().modulus(), 97);
        for bad in [Number::from(0), Number::from(-5), Number::from(2.5), Number::from("abc")] {
            assert_eq!(ModularAdditiveCipher::new(bad).unwrap_err(), CipherError::InvalidModulus);
        }
        assert_eq!(
            ModularAdditiveCipher::new(i128::from(u64::MAX) + 1).unwrap_err(),
            CipherError::InvalidModulus
        );
        let params = CipherParams { modulus: 97, blinding_bound: 0 };
        assert_eq!(
            ModularAdditiveCipher::with_params(params).unwrap_err(),
            CipherError::InvalidBlindingBound
        );
    }

    #[test]
    fn test_default_cipher() {
        let c = ModularAdditiveCipher::default();
        assert_eq!(c.modulus(), DEFAULT_MODULUS);
        assert_eq!(c.blinding_bound(), 1000);
        assert!(!format!("{c:?}").contains("104729"));
    }

    #[test]
    fn test_round_trip_and_residue_invariant() {
        let cipher = ModularAdditiveCipher::new(101).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for p in 0..101u64 {
            let c = cipher.encrypt_with_rng(p, &mut rng).unwrap();
            assert!(c >= 0 && c < 101 * 1000, "ciphertext {c} outside blinding range");
            assert_eq!(cipher.decrypt(c).unwrap(), p);
        }
    }

    #[test]
    fn test_encrypt_is_randomized() {
        let cipher = ModularAdditiveCipher::default();
        let seen: HashSet<Ciphertext> = (0..100).map(|_| cipher.encrypt(12).unwrap()).collect();
        assert!(seen.len() > 1, "100 encryptions of the same plaintext never differed");
    }

    #[test]
    fn test_encrypt_rejects_bad_input() {
        let cipher = ModularAdditiveCipher::default();
        assert_eq!(cipher.encrypt(-1).unwrap_err(), CipherError::OutOfRange { value: -1 });
        assert_eq!(
            cipher.encrypt(DEFAULT_MODULUS).unwrap_err(),
            CipherError::OutOfRange { value: i128::from(DEFAULT_MODULUS) }
        );
        assert_eq!(cipher.encrypt(3.5).unwrap_err(), CipherError::NotAnInteger);
        assert_eq!(cipher.encrypt(f64::NAN).unwrap_err(), CipherError::NotAnInteger);
        assert_eq!(cipher.encrypt("string").unwrap_err(), CipherError::NotAnInteger);
        assert!(cipher.encrypt(DEFAULT_MODULUS - 1).is_ok());
        assert!(cipher.encrypt(0).is_ok());
    }

    #[test]
    fn test_decrypt_known_value_and_tolerance() {
        let cipher = ModularAdditiveCipher::default();
        assert_eq!(cipher.decrypt(209_470).unwrap(), 12);
        assert_eq!(cipher.decrypt(-1).unwrap(), DEFAULT_MODULUS - 1);
        assert!(cipher.decrypt(i128::MIN).unwrap() < DEFAULT_MODULUS);
        assert_eq!(cipher.decrypt("string").unwrap_err(), CipherError::NotANumber);
        assert_eq!(cipher.decrypt(1.5).unwrap_err(), CipherError::NotANumber);
    }

    #[test]
    fn test_modulus_one_has_single_plaintext() {
        let cipher = ModularAdditiveCipher::new(1).unwrap();
        assert_eq!(cipher.decrypt(cipher.encrypt(0).unwrap()).unwrap(), 0);
        assert_eq!(cipher.encrypt(1).unwrap_err(), CipherError::OutOfRange { value: 1 });
    }
}
