//! Ciphertext representation.

use num_integer::Integer;

/// `p + k·M` for a plaintext `p` and blinding factor `k`.
///
/// Signed because a homomorphic difference may go below zero while still
/// encoding a non-negative plaintext.
pub type Ciphertext = i128;

/// Floored residue of `c` modulo `modulus`, always in `[0, modulus - 1]`.
#[must_use]
pub(crate) fn residue(c: Ciphertext, modulus: u64) -> u64 {
    let r = c.mod_floor(&i128::from(modulus));
    // r < modulus <= u64::MAX
    u64::try_from(r).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residue_is_floored() {
        assert_eq!(residue(209_470, 104_729), 12);
        assert_eq!(residue(-1, 7), 6);
        assert_eq!(residue(-14, 7), 0);
        assert_eq!(residue(i128::MIN, 3), 1);
        assert_eq!(residue(5, 1), 0);
    }
}
