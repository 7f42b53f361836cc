//! ElGamal signature generation and verification

use num_bigint::{BigUint, ToBigUint};
use num_integer::Integer;
use num_traits::One;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::arith::{mod_exp, mod_inverse, mod_sub, random_in_range_inclusive};
use crate::error::{ElGamalZkpError, Result};
use crate::keys::{PrivateKey, PublicKey};

/// An ElGamal signature (r, s)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signature {
    pub(crate) r: BigUint,
    pub(crate) s: BigUint,
}

impl Signature {
    /// Create a signature from its components
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// Get the first component, alpha^h mod p
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Get the second component, (m - d*r) * h^-1 mod (p-1)
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(r = {}, s = {})", self.r, self.s)
    }
}

/// Sign `message` under `private`, with an optional caller-supplied nonce.
///
/// When `nonce` is `None`, a fresh `h` is drawn from [2, p-2] and re-drawn
/// until `gcd(h, p-1) = 1`. A caller-supplied nonce is used as-is; if it is
/// not invertible mod `p-1` signing fails with
/// [`ElGamalZkpError::InvalidNonce`]. Reusing a nonce across two messages
/// leaks the private key (see [`crate::attack::extract_private_key`]).
///
/// The caller is responsible for keeping `message` in [0, p-1).
pub fn sign(private: &PrivateKey, message: &BigUint, nonce: Option<&BigUint>) -> Result<Signature> {
    let p = &private.p;
    let p_minus_1 = p - BigUint::one();

    let h = match nonce {
        Some(h) => h.clone(),
        None => {
            let two = 2u32.to_biguint().unwrap();
            let high = p - &two;
            loop {
                let candidate = random_in_range_inclusive(&two, &high);
                if candidate.gcd(&p_minus_1).is_one() {
                    break candidate;
                }
            }
        }
    };

    let h_inv = mod_inverse(&h, &p_minus_1).ok_or(ElGamalZkpError::InvalidNonce)?;

    // r = alpha^h mod p
    let r = mod_exp(&private.alpha, &h, p);

    // s = (m - d*r) * h^-1 mod (p-1)
    let d_r = (&private.d * &r) % &p_minus_1;
    let s = (mod_sub(message, &d_r, &p_minus_1) * h_inv) % &p_minus_1;

    Ok(Signature { r, s })
}

/// Check `sig` against `public` and `message`.
///
/// Pure equality test of `beta^r * r^s mod p` against `alpha^m mod p`;
/// out-of-range components are not rejected, they simply fail the test.
pub fn verify_signature(sig: &Signature, public: &PublicKey, message: &BigUint) -> bool {
    let p = &public.p;

    let t1 = (mod_exp(&public.beta, &sig.r, p) * mod_exp(&sig.r, &sig.s, p)) % p;
    let t2 = mod_exp(&public.alpha, message, p);

    t1 == t2
}
