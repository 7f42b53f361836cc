//! Verifying side of the interactive discrete-log proof

use log::debug;
use num_bigint::BigUint;
use rand::{thread_rng, Rng};

use crate::arith::mod_exp;
use crate::params::ProofParams;

/// A round's received commitment and chosen bit.
///
/// Returned by [`Verifier::challenge`] and consumed by [`Verifier::verify`],
/// so the check always runs against the commitment that preceded it.
#[derive(Debug)]
pub struct ChallengeState {
    c: BigUint,
    b: bool,
}

/// The party checking a claim of discrete-log knowledge
#[derive(Clone, Debug)]
pub struct Verifier {
    params: ProofParams,
    name: String,
}

impl Verifier {
    /// Build a verifier for the given (already validated) public triple
    pub fn new(params: ProofParams) -> Self {
        Verifier {
            params,
            name: "Verifier".to_string(),
        }
    }

    /// Replace the display name used in log output
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get the public triple this verifier checks against
    pub fn params(&self) -> &ProofParams {
        &self.params
    }

    /// Get the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Receive a commitment and answer with an unbiased challenge bit
    pub fn challenge(&self, commitment: BigUint) -> (bool, ChallengeState) {
        let b = thread_rng().gen::<bool>();
        debug!("{}: chose b = {}", self.name, u8::from(b));

        (
            b,
            ChallengeState {
                c: commitment,
                b,
            },
        )
    }

    /// Check the prover's response: `c * y^b mod p` must equal `g^h mod p`
    pub fn verify(&self, round: ChallengeState, response: &BigUint) -> bool {
        let p = self.params.modulus();

        let claimed = if round.b {
            (round.c * self.params.public_value()) % p
        } else {
            round.c % p
        };
        let actual = mod_exp(self.params.generator(), response, p);

        let result = claimed == actual;
        debug!("{}: round verification result is {}", self.name, result);
        result
    }
}
