//! Round-repetition orchestrator for the interactive proof

use log::{debug, info};

use crate::error::{ElGamalZkpError, Result};
use crate::prover::Prover;
use crate::verifier::Verifier;

/// Result of a multi-round challenge run
#[derive(Clone, Debug, PartialEq)]
pub struct ChallengeOutcome {
    /// Whether the prover convinced the verifier in every round
    pub accepted: bool,
    /// `(1/2)^n`: the chance a single-strategy cheater survives all `n`
    /// rounds. `None` when the run never started (parameter mismatch).
    pub soundness_error: Option<f64>,
}

/// Run `rounds` sequential commit/challenge/response/verify exchanges.
///
/// The run is accepted only if every round verifies; the loop stops at the
/// first failed round, which is equivalent because later rounds cannot
/// change an already-failed outcome. Prover and verifier must agree on the
/// `(p, g, y)` triple; a mismatch is reported as a failed outcome with no
/// soundness estimate rather than an error. `rounds` must be at least 1.
pub fn run_challenge(prover: &Prover, verifier: &Verifier, rounds: u32) -> Result<ChallengeOutcome> {
    if rounds == 0 {
        return Err(ElGamalZkpError::InvalidParams(
            "challenge needs at least one round".to_string(),
        ));
    }

    if prover.params() != verifier.params() {
        info!(
            "{} and {} disagree on the public parameters; aborting",
            prover.name(),
            verifier.name()
        );
        return Ok(ChallengeOutcome {
            accepted: false,
            soundness_error: None,
        });
    }

    let soundness_error = 0.5_f64.powi(rounds as i32);

    for round in 1..=rounds {
        let (c, round_secret) = prover.commit();
        let (b, state) = verifier.challenge(c);
        let h = prover.respond(round_secret, b);

        if !verifier.verify(state, &h) {
            debug!("round {}/{} failed, rejecting", round, rounds);
            return Ok(ChallengeOutcome {
                accepted: false,
                soundness_error: Some(soundness_error),
            });
        }
    }

    info!(
        "{} convinced {} over {} rounds",
        prover.name(),
        verifier.name(),
        rounds
    );
    Ok(ChallengeOutcome {
        accepted: true,
        soundness_error: Some(soundness_error),
    })
}
