//! Validated public parameters for the discrete-log proof protocol

use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;

use crate::arith::{is_primitive_root, is_probable_prime, PRIMALITY_ROUNDS};
use crate::error::{ElGamalZkpError, Result};

/// The public triple `(p, g, y)` shared by prover and verifier.
///
/// Construction is the single validation point for the protocol: a value of
/// this type always satisfies `p` prime, `g` a primitive root mod `p`, and
/// `1 <= y < p`. (`y = 0` is rejected because no power of `g` reaches it and
/// it would leave the AssumeOne commitment without an inverse.)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofParams {
    pub(crate) p: BigUint,
    pub(crate) g: BigUint,
    pub(crate) y: BigUint,
}

impl ProofParams {
    /// Validate and build the public triple
    pub fn new(p: BigUint, g: BigUint, y: BigUint) -> Result<Self> {
        if !is_probable_prime(&p, PRIMALITY_ROUNDS) {
            return Err(ElGamalZkpError::InvalidParams(format!(
                "modulus {} is not prime",
                p
            )));
        }
        if y.is_zero() || y >= p {
            return Err(ElGamalZkpError::InvalidParams(format!(
                "public value {} is outside [1, p)",
                y
            )));
        }
        if !is_primitive_root(&g, &p) {
            return Err(ElGamalZkpError::InvalidParams(format!(
                "{} is not a primitive root mod {}",
                g, p
            )));
        }

        Ok(ProofParams { p, g, y })
    }

    /// Get the prime modulus
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Get the group generator
    pub fn generator(&self) -> &BigUint {
        &self.g
    }

    /// Get the public value `g^x mod p`
    pub fn public_value(&self) -> &BigUint {
        &self.y
    }
}

impl fmt::Display for ProofParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProofParams(p = {}, g = {}, y = {})", self.p, self.g, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::ToBigUint;

    fn big(n: u32) -> BigUint {
        n.to_biguint().unwrap()
    }

    #[test]
    fn test_valid_params_accepted() {
        let params = ProofParams::new(big(23), big(5), big(8)).unwrap();
        assert_eq!(params.modulus(), &big(23));
        assert_eq!(params.generator(), &big(5));
        assert_eq!(params.public_value(), &big(8));
    }

    #[test]
    fn test_composite_modulus_rejected() {
        assert!(matches!(
            ProofParams::new(big(24), big(5), big(8)),
            Err(ElGamalZkpError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_public_value_out_of_range_rejected() {
        assert!(ProofParams::new(big(23), big(5), big(23)).is_err());
        assert!(ProofParams::new(big(23), big(5), big(40)).is_err());
        assert!(ProofParams::new(big(23), big(5), big(0)).is_err());
    }

    #[test]
    fn test_non_primitive_root_rejected() {
        // 2 has order 11 mod 23
        assert!(matches!(
            ProofParams::new(big(23), big(2), big(8)),
            Err(ElGamalZkpError::InvalidParams(_))
        ));
    }
}
