//! Proving side of the interactive discrete-log proof

use log::debug;
use num_bigint::{BigUint, ToBigUint};
use num_traits::One;

use crate::arith::{mod_exp, random_in_range_inclusive};
use crate::error::{ElGamalZkpError, Result};
use crate::params::ProofParams;

/// Response strategy. Cheating roles hold no secret; they bet on one value
/// of the verifier's bit and lose the round whenever the other comes up.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Role {
    Honest { secret: BigUint },
    AssumeZero,
    AssumeOne,
}

/// The ephemeral nonce of a single round.
///
/// Returned by [`Prover::commit`] and consumed by [`Prover::respond`], so a
/// response without a preceding commitment, or two responses from one
/// commitment, cannot be written.
#[derive(Debug)]
pub struct RoundSecret {
    r: BigUint,
}

/// One party claiming knowledge of `x` with `g^x mod p = y`
#[derive(Clone, Debug)]
pub struct Prover {
    params: ProofParams,
    role: Role,
    name: String,
}

impl Prover {
    /// Build an honest prover holding the secret exponent.
    ///
    /// Fails with `InvalidParams` when `g^x mod p != y`; the `(p, g, y)`
    /// triple itself was already validated when `params` was constructed.
    pub fn honest(params: ProofParams, secret: BigUint) -> Result<Self> {
        if mod_exp(params.generator(), &secret, params.modulus()) != *params.public_value() {
            return Err(ElGamalZkpError::InvalidParams(
                "secret does not satisfy g^x mod p = y".to_string(),
            ));
        }

        Ok(Prover {
            params,
            role: Role::Honest { secret },
            name: "HonestProver".to_string(),
        })
    }

    /// Build a cheating prover that bets on the challenge bit being 0
    pub fn assume_zero(params: ProofParams) -> Self {
        Prover {
            params,
            role: Role::AssumeZero,
            name: "CheaterProverB0".to_string(),
        }
    }

    /// Build a cheating prover that bets on the challenge bit being 1
    pub fn assume_one(params: ProofParams) -> Self {
        Prover {
            params,
            role: Role::AssumeOne,
            name: "CheaterProverB1".to_string(),
        }
    }

    /// Replace the display name used in log output
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get the public triple this prover argues about
    pub fn params(&self) -> &ProofParams {
        &self.params
    }

    /// Get the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Open a round: draw a fresh nonce `r` from [2, p] and send the
    /// commitment.
    ///
    /// Honest and AssumeZero provers commit to `g^r mod p`. AssumeOne
    /// commits to `g^r * y^-1 mod p`, pre-dividing by `y` so its fixed
    /// response survives the verifier's `b = 1` check. All three
    /// commitments are uniform over the group, so the verifier cannot tell
    /// the roles apart from `c` alone.
    pub fn commit(&self) -> (BigUint, RoundSecret) {
        let p = self.params.modulus();
        let two = 2u32.to_biguint().unwrap();
        let r = random_in_range_inclusive(&two, p);

        let c = match self.role {
            Role::Honest { .. } | Role::AssumeZero => mod_exp(self.params.generator(), &r, p),
            Role::AssumeOne => {
                // y is a nonzero residue mod the prime p, so Fermat gives
                // the inverse: y^-1 = y^(p-2) mod p
                let y_inv = mod_exp(self.params.public_value(), &(p - &two), p);
                (mod_exp(self.params.generator(), &r, p) * y_inv) % p
            }
        };

        debug!("{}: sending c = {}", self.name, c);
        (c, RoundSecret { r })
    }

    /// Close a round: answer the verifier's challenge bit.
    ///
    /// The honest prover returns `(r + b*x) mod (p-1)`; both cheating roles
    /// ignore the bit and return `r mod (p-1)`.
    pub fn respond(&self, round: RoundSecret, challenge: bool) -> BigUint {
        let p_minus_1 = self.params.modulus() - BigUint::one();

        let h = match &self.role {
            Role::Honest { secret } if challenge => (round.r + secret) % &p_minus_1,
            _ => round.r % &p_minus_1,
        };

        debug!("{}: sending h = {}", self.name, h);
        h
    }
}
