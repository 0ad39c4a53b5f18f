//! Prime factorization by trial division.
//!
//! Correctness over speed: decoding factors the full Gödel number, and trial
//! division is the dominant cost there. Realistic formal-language expressions
//! keep every factor small, so the simple algorithm is adequate.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Prime factors of `n`, non-decreasing, with multiplicity.
///
/// Trial division from 2 upward: each factor is divided out as it is found,
/// and the divisor advances only when it no longer divides. `factor(1)` is
/// empty; zero is a domain error.
pub fn factor(n: &BigUint) -> Result<Vec<BigUint>> {
    if n.is_zero() {
        return Err(Error::FactorOfZero);
    }

    let mut n = n.clone();
    let mut divisor = BigUint::from(2u32);
    let one = BigUint::one();
    let mut factors = Vec::new();
    while divisor <= n {
        if (&n % &divisor).is_zero() {
            n /= &divisor;
            factors.push(divisor.clone());
        } else {
            divisor += &one;
        }
    }
    Ok(factors)
}

/// [`factor`] for machine words, used to classify per-position codes.
///
/// Codes fit in a `u64` (the largest is a sieved prime cubed) and have at
/// most three factors when well formed, so the result stays inline. Zero and
/// one both factor to nothing here; the codec never asks about either.
pub fn factor_u64(mut n: u64) -> SmallVec<u64, 4> {
    let mut factors = SmallVec::new();
    let mut divisor = 2u64;
    while divisor <= n {
        if n % divisor == 0 {
            n /= divisor;
            factors.push(divisor);
        } else {
            divisor += 1;
        }
    }
    factors
}

/// Run-length group a non-decreasing factor sequence into
/// `(factor, multiplicity)` pairs, preserving first-appearance order.
pub fn group(factors: &[BigUint]) -> Vec<(BigUint, u64)> {
    let mut groups: Vec<(BigUint, u64)> = Vec::new();
    for f in factors {
        match groups.last_mut() {
            Some((current, count)) if current == f => *count += 1,
            _ => groups.push((f.clone(), 1)),
        }
    }
    groups
}
