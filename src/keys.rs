//! ElGamal key generation and key material

use num_bigint::{BigUint, ToBigUint};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::arith::{generate_prime, mod_exp, random_in_range_inclusive};
use crate::error::{ElGamalZkpError, Result};

/// ElGamal signing public key
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PublicKey {
    pub(crate) p: BigUint,     // Prime modulus
    pub(crate) alpha: BigUint, // Generator
    pub(crate) beta: BigUint,  // alpha^d mod p
}

impl PublicKey {
    /// Create a public key from existing components
    pub fn new(p: BigUint, alpha: BigUint, beta: BigUint) -> Self {
        PublicKey { p, alpha, beta }
    }

    /// Get the prime modulus
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Get the generator
    pub fn generator(&self) -> &BigUint {
        &self.alpha
    }

    /// Get the public component (alpha^d mod p)
    pub fn beta(&self) -> &BigUint {
        &self.beta
    }

    /// Get the bit size of the modulus
    pub fn bit_size(&self) -> u64 {
        self.p.bits()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({} bits)", self.bit_size())
    }
}

/// ElGamal signing private key
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrivateKey {
    pub(crate) p: BigUint,     // Prime modulus
    pub(crate) alpha: BigUint, // Generator
    pub(crate) d: BigUint,     // Secret exponent
}

impl PrivateKey {
    /// Create a private key from existing components
    pub fn new(p: BigUint, alpha: BigUint, d: BigUint) -> Self {
        PrivateKey { p, alpha, d }
    }

    /// Get the prime modulus
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Get the generator
    pub fn generator(&self) -> &BigUint {
        &self.alpha
    }

    /// Get the secret exponent
    pub fn secret_exponent(&self) -> &BigUint {
        &self.d
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(***)")
    }
}

/// ElGamal key pair
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyPair {
    pub public_key: PublicKey,
    pub private_key: PrivateKey,
}

impl KeyPair {
    /// Generate a key pair with a prime modulus of `bits` bits.
    ///
    /// The generator `alpha` is drawn uniformly from [1, p) without an order
    /// check, so it may land in a small subgroup. That matches the classical
    /// textbook scheme this crate implements; callers needing a guaranteed
    /// generator should construct keys via [`KeyPair::from_components`] with
    /// a known primitive root.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elgamal_zkp::KeyPair;
    ///
    /// let keypair = KeyPair::generate(32).expect("keygen failed");
    /// assert_eq!(keypair.public_key.bit_size(), 32);
    /// ```
    pub fn generate(bits: u64) -> Result<Self> {
        if bits < 3 {
            return Err(ElGamalZkpError::InvalidKeySize(bits));
        }

        let p = generate_prime(bits)?;
        let one = 1u32.to_biguint().unwrap();
        let two = 2u32.to_biguint().unwrap();
        let p_minus_1 = &p - &one;

        // alpha in [1, p-1], secret d in [2, p-1]
        let alpha = random_in_range_inclusive(&one, &p_minus_1);
        let d = random_in_range_inclusive(&two, &p_minus_1);

        Ok(Self::from_components(p, alpha, d))
    }

    /// Build a key pair from a fixed modulus, generator and secret exponent
    pub fn from_components(p: BigUint, alpha: BigUint, d: BigUint) -> Self {
        let beta = mod_exp(&alpha, &d, &p);

        KeyPair {
            public_key: PublicKey {
                p: p.clone(),
                alpha: alpha.clone(),
                beta,
            },
            private_key: PrivateKey { p, alpha, d },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::is_probable_prime;

    fn big(n: u32) -> BigUint {
        n.to_biguint().unwrap()
    }

    #[test]
    fn test_generate_respects_invariants() {
        let keypair = KeyPair::generate(24).unwrap();
        let public = &keypair.public_key;
        let private = &keypair.private_key;

        assert!(is_probable_prime(&public.p, 20));
        assert_eq!(public.p.bits(), 24);
        assert_eq!(public.p, private.p);
        assert_eq!(public.alpha, private.alpha);

        assert!(private.alpha >= big(1) && private.alpha < public.p);
        assert!(private.d >= big(2) && private.d <= &public.p - big(1));
        assert_eq!(public.beta, mod_exp(&private.alpha, &private.d, &public.p));
    }

    #[test]
    fn test_generate_rejects_tiny_size() {
        assert!(matches!(
            KeyPair::generate(2),
            Err(ElGamalZkpError::InvalidKeySize(2))
        ));
    }

    #[test]
    fn test_from_components_toy_key() {
        // beta = 5^6 mod 23 = 8
        let keypair = KeyPair::from_components(big(23), big(5), big(6));
        assert_eq!(keypair.public_key.beta, big(8));
    }

    #[test]
    fn test_private_key_display_masks_secret() {
        let keypair = KeyPair::from_components(big(23), big(5), big(6));
        let shown = format!("{}", keypair.private_key);
        assert!(!shown.contains('6'));
    }
}
