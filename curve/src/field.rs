//! Modular arithmetic over a prime field `F_p` on unsigned big integers.
//!
//! Values handed to these helpers are expected to be reduced modulo the
//! given modulus unless stated otherwise.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Multiplicative inverse of `value` modulo `modulus`.
///
/// Uses the extended Euclidean algorithm. Returns `None` exactly when
/// `gcd(value, modulus) != 1`, which for a prime modulus means `value ≡ 0`.
pub fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    if modulus.is_zero() {
        return None;
    }

    let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let mut old_r = BigInt::from_biguint(Sign::Plus, value % modulus);
    let mut r = m.clone();
    let mut old_t = BigInt::one();
    let mut t = BigInt::zero();

    while !r.is_zero() {
        let quotient = old_r.div_floor(&r);

        let next_r = &old_r - &quotient * &r;
        old_r = core::mem::replace(&mut r, next_r);

        let next_t = &old_t - &quotient * &t;
        old_t = core::mem::replace(&mut t, next_t);
    }

    if !old_r.is_one() {
        return None;
    }

    old_t.mod_floor(&m).to_biguint()
}

/// `(a - b) mod modulus` without leaving the unsigned domain.
#[inline]
pub fn mod_sub(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    let a = a % modulus;
    let b = b % modulus;
    if a >= b {
        a - b
    } else {
        modulus - (b - a)
    }
}

/// `-a mod modulus`.
#[inline]
pub fn mod_neg(a: &BigUint, modulus: &BigUint) -> BigUint {
    mod_sub(&BigUint::zero(), a, modulus)
}
