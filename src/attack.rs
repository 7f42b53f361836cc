//! Private-key recovery from a pair of nonce-reusing signatures

use num_bigint::BigUint;
use num_traits::One;

use crate::arith::{mod_inverse, mod_sub};
use crate::keys::{PrivateKey, PublicKey};
use crate::signature::Signature;

/// Outcome of a key-extraction attempt.
///
/// `NotRecoverable` is an expected result, not a failure: it covers both
/// unmet algebraic preconditions (no nonce reuse, equal messages or equal
/// `s` components) and non-invertible intermediate values mod `p-1`.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recovery {
    Recovered(PrivateKey),
    NotRecoverable,
}

impl Recovery {
    /// The recovered key, if there is one
    pub fn key(self) -> Option<PrivateKey> {
        match self {
            Recovery::Recovered(key) => Some(key),
            Recovery::NotRecoverable => None,
        }
    }
}

/// Recover the signer's private key from two signatures that reused a nonce.
///
/// Requires `r1 = r2` (the shared nonce shows up as a shared first
/// component), `s1 != s2` and `m1 != m2`. The nonce falls out as
/// `h = (m2 - m1) * (s2 - s1)^-1 mod (p-1)`, after which the secret is
/// `d = (m1 - h*s1) * r1^-1 mod (p-1)`. Either inverse may not exist; both
/// cases map to [`Recovery::NotRecoverable`].
pub fn extract_private_key(
    public: &PublicKey,
    m1: &BigUint,
    sig1: &Signature,
    m2: &BigUint,
    sig2: &Signature,
) -> Recovery {
    if sig1.r() != sig2.r() || sig1.s() == sig2.s() || m1 == m2 {
        return Recovery::NotRecoverable;
    }

    let p_minus_1 = public.modulus() - BigUint::one();

    // h = (m2 - m1) * (s2 - s1)^-1 mod (p-1)
    let delta_s = mod_sub(sig2.s(), sig1.s(), &p_minus_1);
    let h = match mod_inverse(&delta_s, &p_minus_1) {
        Some(inv) => (mod_sub(m2, m1, &p_minus_1) * inv) % &p_minus_1,
        None => return Recovery::NotRecoverable,
    };

    // d = (m1 - h*s1) * r1^-1 mod (p-1)
    let h_s1 = (&h * sig1.s()) % &p_minus_1;
    let d = match mod_inverse(sig1.r(), &p_minus_1) {
        Some(inv) => (mod_sub(m1, &h_s1, &p_minus_1) * inv) % &p_minus_1,
        None => return Recovery::NotRecoverable,
    };

    Recovery::Recovered(PrivateKey::new(
        public.modulus().clone(),
        public.generator().clone(),
        d,
    ))
}
