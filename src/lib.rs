//! MAC ― Modular Additive Cipher
//!
//! Plaintexts in `[0, M-1]` are encoded as `p + k·M` with a random blinding
//! factor `k`. Ciphertexts combine with plain integer `+`/`-`, and the holder
//! of `M` recovers the sum or difference by a floored `mod M`.
//!
//! Not a secure scheme: `M` is a small fixed integer.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, missing_docs)]

pub mod algebra;
pub mod cipher;
pub mod error;
pub mod number;
pub mod params;
pub mod scheme;

pub use cipher::Ciphertext;
pub use error::{CipherError, Result};
pub use number::Number;
pub use params::{CipherParams, DEFAULT_BLINDING_BOUND, DEFAULT_MODULUS};
pub use scheme::ModularAdditiveCipher;
