//! Error types for the ElGamal / ZKP library

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ElGamalZkpError>;

#[derive(Error, Debug)]
pub enum ElGamalZkpError {
    #[error("Invalid key size: {0} bits (must be at least 3)")]
    InvalidKeySize(u64),

    #[error("Invalid protocol parameters: {0}")]
    InvalidParams(String),

    #[error("Nonce is not invertible modulo p-1")]
    InvalidNonce,

    #[error("Cryptographic error: {0}")]
    CryptoError(String),
}
