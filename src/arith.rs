//! Modular arithmetic shared by the signature scheme and the proof protocol

use crate::error::{ElGamalZkpError, Result};
use num_bigint::{BigInt, BigUint, RandBigInt, ToBigInt, ToBigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::thread_rng;

/// Number of Miller-Rabin rounds used throughout the crate.
pub const PRIMALITY_ROUNDS: usize = 20;

const MAX_PRIME_CANDIDATES: u64 = 100_000;

/// Modular exponentiation: base^exp mod modulus
pub fn mod_exp(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exp, modulus)
}

/// Modular subtraction: (a - b) mod m, always in [0, m)
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    ((a % m) + m - (b % m)) % m
}

/// Modular inverse of `a` mod `m`, or `None` when `gcd(a, m) != 1`
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let m_int = m.to_bigint().unwrap();
    let (gcd, x) = extended_gcd(&a.to_bigint().unwrap(), &m_int);

    if gcd != BigInt::one() {
        return None;
    }

    // Normalize the Bezout coefficient into [0, m)
    (((x % &m_int) + &m_int) % &m_int).to_biguint()
}

/// Iterative extended Euclidean algorithm. Returns `(gcd(a, b), x)` where
/// `a*x + b*y = gcd(a, b)`; BigInt because x goes negative half the time.
fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    (old_r, old_s)
}

/// Miller-Rabin primality test with `rounds` random witnesses
pub fn is_probable_prime(n: &BigUint, rounds: usize) -> bool {
    let two = 2u32.to_biguint().unwrap();
    let three = 3u32.to_biguint().unwrap();

    if n < &two {
        return false;
    }
    if n == &two || n == &three {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let mut rng = thread_rng();
    let n_minus_1 = n - BigUint::one();
    let (s, d) = split_powers_of_two(&n_minus_1);

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_1);
        let mut x = mod_exp(&a, &d, n);

        if x == BigUint::one() || x == n_minus_1 {
            continue;
        }

        for _ in 0..s - 1 {
            x = mod_exp(&x, &two, n);
            if x == n_minus_1 {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

/// Write n as 2^s * d with d odd
fn split_powers_of_two(n: &BigUint) -> (u64, BigUint) {
    let mut s = 0;
    let mut d = n.clone();

    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    (s, d)
}

/// Generate a random probable prime with exactly `bits` bits
pub fn generate_prime(bits: u64) -> Result<BigUint> {
    if bits < 2 {
        return Err(ElGamalZkpError::InvalidKeySize(bits));
    }

    let mut rng = thread_rng();

    for _ in 0..MAX_PRIME_CANDIDATES {
        let mut candidate = rng.gen_biguint(bits);

        // Force the top bit (exact size) and the bottom bit (odd)
        candidate |= BigUint::one() << (bits - 1);
        candidate |= BigUint::one();

        if is_probable_prime(&candidate, PRIMALITY_ROUNDS) {
            return Ok(candidate);
        }
    }

    Err(ElGamalZkpError::CryptoError(format!(
        "failed to find a {}-bit prime after {} candidates",
        bits, MAX_PRIME_CANDIDATES
    )))
}

/// Test whether `g` generates the full multiplicative group mod a prime `p`.
///
/// Checks `g^((p-1)/q) != 1` for every distinct prime factor `q` of `p-1`.
/// The caller is expected to have verified that `p` is prime.
pub fn is_primitive_root(g: &BigUint, p: &BigUint) -> bool {
    let g = g % p;
    if g.is_zero() {
        return false;
    }

    let p_minus_1 = p - BigUint::one();
    distinct_prime_factors(&p_minus_1)
        .iter()
        .all(|q| mod_exp(&g, &(&p_minus_1 / q), p) != BigUint::one())
}

/// Distinct prime factors of `n`, in ascending order.
///
/// Trial division strips everything below 2^10; whatever cofactor remains is
/// split recursively with Pollard's rho so the primitive-root test stays
/// usable at key-generation sizes.
pub fn distinct_prime_factors(n: &BigUint) -> Vec<BigUint> {
    let mut factors = Vec::new();
    let mut m = n.clone();

    let mut small = 2u64;
    while small < 1024 && m > BigUint::one() {
        let s = small.to_biguint().unwrap();
        if (&m % &s).is_zero() {
            while (&m % &s).is_zero() {
                m /= &s;
            }
            factors.push(s);
        }
        small = if small == 2 { 3 } else { small + 2 };
    }

    split_cofactor(m, &mut factors);
    factors.sort();
    factors
}

fn split_cofactor(n: BigUint, factors: &mut Vec<BigUint>) {
    if n <= BigUint::one() {
        return;
    }
    if is_probable_prime(&n, PRIMALITY_ROUNDS) {
        if !factors.contains(&n) {
            factors.push(n);
        }
        return;
    }

    let divisor = pollard_rho(&n);
    let quotient = &n / &divisor;
    split_cofactor(divisor, factors);
    split_cofactor(quotient, factors);
}

/// Pollard's rho with Floyd cycle detection. `n` must be an odd composite.
fn pollard_rho(n: &BigUint) -> BigUint {
    let one = BigUint::one();
    let two = 2u32.to_biguint().unwrap();
    let mut rng = thread_rng();

    loop {
        let c = rng.gen_biguint_range(&one, n);
        let mut x = rng.gen_biguint_range(&two, n);
        let mut y = x.clone();
        let step = |v: &BigUint| (v * v + &c) % n;

        loop {
            x = step(&x);
            y = step(&step(&y));

            let diff = if x > y { &x - &y } else { &y - &x };
            if diff.is_zero() {
                // Cycle without a factor; restart with a new polynomial
                break;
            }

            let d = diff.gcd(n);
            if d > one {
                if &d < n {
                    return d;
                }
                break;
            }
        }
    }
}

/// Uniform random integer in the inclusive range [low, high]
pub fn random_in_range_inclusive(low: &BigUint, high: &BigUint) -> BigUint {
    let mut rng = thread_rng();
    rng.gen_biguint_range(low, &(high + BigUint::one()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u32) -> BigUint {
        n.to_biguint().unwrap()
    }

    #[test]
    fn test_mod_exp() {
        // 5^6 mod 23 = 8
        assert_eq!(mod_exp(&big(5), &big(6), &big(23)), big(8));
    }

    #[test]
    fn test_mod_sub_wraps() {
        assert_eq!(mod_sub(&big(10), &big(14), &big(22)), big(18));
        assert_eq!(mod_sub(&big(14), &big(10), &big(22)), big(4));
    }

    #[test]
    fn test_mod_inverse() {
        let inv = mod_inverse(&big(7), &big(22)).unwrap();
        assert_eq!(inv, big(19));
        assert_eq!((big(7) * inv) % big(22), BigUint::one());
    }

    #[test]
    fn test_mod_inverse_missing() {
        // gcd(11, 22) = 11
        assert!(mod_inverse(&big(11), &big(22)).is_none());
        assert!(mod_inverse(&big(4), &big(22)).is_none());
    }

    #[test]
    fn test_is_probable_prime() {
        for p in [2u32, 3, 5, 7, 11, 13, 23, 97, 7919] {
            assert!(is_probable_prime(&big(p), 20), "{} should be prime", p);
        }
        for c in [1u32, 4, 6, 9, 15, 21, 22, 91, 7917] {
            assert!(!is_probable_prime(&big(c), 20), "{} should be composite", c);
        }
    }

    #[test]
    fn test_generate_prime_has_requested_size() {
        let p = generate_prime(16).unwrap();
        assert_eq!(p.bits(), 16);
        assert!(is_probable_prime(&p, 20));
    }

    #[test]
    fn test_generate_prime_rejects_tiny_size() {
        assert!(generate_prime(1).is_err());
    }

    #[test]
    fn test_distinct_prime_factors() {
        // 22 = 2 * 11
        assert_eq!(distinct_prime_factors(&big(22)), vec![big(2), big(11)]);
        // 360 = 2^3 * 3^2 * 5
        assert_eq!(
            distinct_prime_factors(&big(360)),
            vec![big(2), big(3), big(5)]
        );
        assert_eq!(distinct_prime_factors(&big(97)), vec![big(97)]);
    }

    #[test]
    fn test_distinct_prime_factors_large_cofactor() {
        // 1048583 and 1048589 are both prime and above the trial-division bound
        let n = big(1_048_583) * big(1_048_589);
        assert_eq!(
            distinct_prime_factors(&n),
            vec![big(1_048_583), big(1_048_589)]
        );
    }

    #[test]
    fn test_is_primitive_root() {
        // 5 generates Z_23^*, 2 has order 11
        assert!(is_primitive_root(&big(5), &big(23)));
        assert!(!is_primitive_root(&big(2), &big(23)));
        assert!(!is_primitive_root(&big(0), &big(23)));
        assert!(!is_primitive_root(&big(1), &big(23)));
    }

    #[test]
    fn test_random_in_range_inclusive_hits_bounds() {
        let low = big(2);
        let high = big(3);
        let mut low_seen = false;
        let mut high_seen = false;
        for _ in 0..200 {
            let v = random_in_range_inclusive(&low, &high);
            assert!(v >= low && v <= high);
            if v == low {
                low_seen = true;
            } else if v == high {
                high_seen = true;
            }
        }
        assert!(low_seen && high_seen);
    }
}
