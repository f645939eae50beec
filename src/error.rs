//! Error taxonomy for the modular additive cipher.

use thiserror::Error;

/// Every way a cipher operation can reject its input.
///
/// Messages never carry the modulus or a decrypted plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Modulus is not an integer in `[1, u64::MAX]`.
    #[error("modulus must be a positive integer")]
    InvalidModulus,
    /// Blinding bound of zero leaves no factor to draw.
    #[error("blinding bound must be positive")]
    InvalidBlindingBound,
    /// `encrypt` input is fractional, non-finite or not numeric at all.
    #[error("plaintext is not an integer")]
    NotAnInteger,
    /// `encrypt` input lies outside `[0, modulus - 1]`.
    #[error("plaintext is out of range: {value}")]
    OutOfRange {
        /// The rejected plaintext.
        value: i128,
    },
    /// `decrypt` input is not an integral number.
    #[error("ciphertext is not a number")]
    NotANumber,
    /// Plaintext sum would reach or pass the modulus.
    #[error("sum exceeds modulus")]
    SumOverflow,
    /// Plaintext difference would be negative.
    #[error("difference is negative")]
    DifferenceUnderflow,
    /// Raw ciphertext arithmetic left the `i128` range.
    #[error("ciphertext arithmetic overflowed")]
    CiphertextOverflow,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CipherError>;
