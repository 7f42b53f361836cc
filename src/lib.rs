//! # ElGamal signatures and a discrete-log ZKP
//!
//! This library implements two classical discrete-logarithm protocols over a
//! prime field:
//!
//! - The **ElGamal signature scheme**: key generation, signing, verification,
//!   and the key-recovery attack that a reused signing nonce makes possible.
//! - An **interactive zero-knowledge proof** of knowledge of a discrete log,
//!   with an honest prover, two cheating-prover strategies, a verifier, and
//!   an orchestrator that amplifies soundness by repeating rounds.
//!
//! Everything runs on arbitrary-precision integers, so the same code drives
//! hand-checkable toy groups and multi-hundred-bit moduli. It is a study
//! implementation of the textbook constructions; do not use it to protect
//! anything.
//!
//! ## Signing
//!
//! ```rust
//! use elgamal_zkp::{sign, verify_signature, KeyPair};
//! use num_bigint::BigUint;
//!
//! let keypair = KeyPair::generate(32).expect("keygen failed");
//! let message = BigUint::from(42u32);
//!
//! let sig = sign(&keypair.private_key, &message, None).expect("signing failed");
//! assert!(verify_signature(&sig, &keypair.public_key, &message));
//! ```
//!
//! ## Proving knowledge of a discrete log
//!
//! ```rust
//! use elgamal_zkp::{run_challenge, ProofParams, Prover, Verifier};
//! use num_bigint::BigUint;
//!
//! // y = 5^6 mod 23 = 8; the prover knows the exponent 6
//! let params = ProofParams::new(
//!     BigUint::from(23u32),
//!     BigUint::from(5u32),
//!     BigUint::from(8u32),
//! )
//! .expect("invalid parameters");
//!
//! let prover = Prover::honest(params.clone(), BigUint::from(6u32)).expect("bad secret");
//! let verifier = Verifier::new(params);
//!
//! let outcome = run_challenge(&prover, &verifier, 10).expect("challenge failed");
//! assert!(outcome.accepted);
//! ```

pub mod arith;
pub mod attack;
pub mod challenge;
pub mod error;
pub mod keys;
pub mod params;
pub mod prover;
pub mod signature;
pub mod verifier;

// Re-export the main types for convenience
pub use attack::{extract_private_key, Recovery};
pub use challenge::{run_challenge, ChallengeOutcome};
pub use error::{ElGamalZkpError, Result};
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use params::ProofParams;
pub use prover::{Prover, RoundSecret};
pub use signature::{sign, verify_signature, Signature};
pub use verifier::{ChallengeState, Verifier};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
