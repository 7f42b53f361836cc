//! Demo walking through both protocols: sign/verify/attack, then the
//! interactive proof with an honest and a cheating prover.

use elgamal_zkp::{
    extract_private_key, run_challenge, sign, verify_signature, KeyPair, ProofParams, Prover,
    Recovery, Result, Verifier,
};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

fn main() -> Result<()> {
    env_logger::init();

    signature_demo()?;
    proof_demo()?;
    Ok(())
}

fn signature_demo() -> Result<()> {
    println!("=== ElGamal signatures ===");

    let keypair = KeyPair::generate(64)?;
    println!("generated {}", keypair.public_key);

    let message = BigUint::from(123_456u32);
    let sig = sign(&keypair.private_key, &message, None)?;
    println!(
        "signed m = {}: {} -> valid: {}",
        message,
        sig,
        verify_signature(&sig, &keypair.public_key, &message)
    );

    // Reuse one nonce for two messages and watch the key fall out
    let p_minus_1 = keypair.public_key.modulus() - BigUint::one();
    let mut nonce = BigUint::from(101u32);
    while !nonce.gcd(&p_minus_1).is_one() {
        nonce += 2u32;
    }
    let (m1, m2) = (BigUint::from(1_000u32), BigUint::from(2_001u32));
    let sig1 = sign(&keypair.private_key, &m1, Some(&nonce))?;
    let sig2 = sign(&keypair.private_key, &m2, Some(&nonce))?;

    match extract_private_key(&keypair.public_key, &m1, &sig1, &m2, &sig2) {
        Recovery::Recovered(key) => println!(
            "nonce reuse leaked the secret exponent: recovered d matches: {}",
            key.secret_exponent() == &(keypair.private_key.secret_exponent() % &p_minus_1)
        ),
        Recovery::NotRecoverable => println!("attack preconditions not met this run"),
    }

    Ok(())
}

fn proof_demo() -> Result<()> {
    println!("=== Interactive discrete-log proof ===");

    // Toy group: p = 23, g = 5, secret x = 6, y = 5^6 mod 23 = 8
    let params = ProofParams::new(
        BigUint::from(23u32),
        BigUint::from(5u32),
        BigUint::from(8u32),
    )?;
    let rounds = 12;

    let honest = Prover::honest(params.clone(), BigUint::from(6u32))?;
    let verifier = Verifier::new(params.clone());
    let outcome = run_challenge(&honest, &verifier, rounds)?;
    println!(
        "honest prover over {} rounds: accepted = {}, cheater bound = {:?}",
        rounds, outcome.accepted, outcome.soundness_error
    );

    for cheater in [
        Prover::assume_zero(params.clone()),
        Prover::assume_one(params),
    ] {
        let name = cheater.name().to_string();
        let outcome = run_challenge(&cheater, &verifier, rounds)?;
        println!(
            "{} over {} rounds: accepted = {}",
            name, rounds, outcome.accepted
        );
    }

    Ok(())
}
