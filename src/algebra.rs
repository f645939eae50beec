//! Homomorphic add / subtract.
//!
//! Both operations validate the plaintext result before combining, so a
//! wrapped or negative plaintext is never handed back as a ciphertext.

use tracing::trace;

use crate::{
    cipher::Ciphertext,
    error::{CipherError, Result},
    scheme::ModularAdditiveCipher,
};

impl ModularAdditiveCipher {
    /// Ciphertext of `decrypt(c1) + decrypt(c2)`.
    ///
    /// # Errors
    /// [`CipherError::SumOverflow`] when the plaintext sum reaches the modulus,
    /// [`CipherError::CiphertextOverflow`] when `c1 + c2` does not fit in `i128`.
    pub fn add(&self, c1: Ciphertext, c2: Ciphertext) -> Result<Ciphertext> {
        let sum = u128::from(self.residue(c1)) + u128::from(self.residue(c2));
        if sum >= u128::from(self.modulus()) {
            return Err(CipherError::SumOverflow);
        }
        let c = c1.checked_add(c2).ok_or(CipherError::CiphertextOverflow)?;
        trace!("add");
        Ok(c)
    }

    /// Ciphertext of `decrypt(c1) - decrypt(c2)`.
    ///
    /// The raw value may be negative; [`decrypt`](Self::decrypt) still yields the
    /// non-negative difference.
    ///
    /// # Errors
    /// [`CipherError::DifferenceUnderflow`] when `decrypt(c1) < decrypt(c2)`,
    /// [`CipherError::CiphertextOverflow`] when `c1 - c2` does not fit in `i128`.
    pub fn subtract(&self, c1: Ciphertext, c2: Ciphertext) -> Result<Ciphertext> {
        if self.residue(c1) < self.residue(c2) {
            return Err(CipherError::DifferenceUnderflow);
        }
        let c = c1.checked_sub(c2).ok_or(CipherError::CiphertextOverflow)?;
        trace!("subtract");
        Ok(c)
    }
}
