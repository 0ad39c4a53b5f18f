//! The constant-sign bijection.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Bijective mapping between constant signs and their fixed codes.
///
/// Built once, validated at construction, never mutated afterwards, so both
/// lookup directions can be shared read-only.
#[derive(Debug, Clone)]
pub struct SignTable {
    forward: HashMap<char, u64>,
    inverse: HashMap<u64, char>,
    max_code: u64,
}

impl SignTable {
    /// Build the table from `(sign, code)` pairs.
    ///
    /// Fails if any sign or any code appears twice; either repetition breaks
    /// the bijection.
    pub fn new(pairs: impl IntoIterator<Item = (char, u64)>) -> Result<Self> {
        let mut forward = HashMap::new();
        let mut inverse = HashMap::new();
        let mut max_code = 0;
        for (sign, code) in pairs {
            if inverse.insert(code, sign).is_some() {
                return Err(Error::DuplicateSignCode { code });
            }
            if forward.insert(sign, code).is_some() {
                return Err(Error::DuplicateSign { sign });
            }
            max_code = max_code.max(code);
        }
        Ok(Self {
            forward,
            inverse,
            max_code,
        })
    }

    /// The fixed code of `sign`, if it is a constant sign.
    #[inline]
    pub fn code(&self, sign: char) -> Option<u64> {
        self.forward.get(&sign).copied()
    }

    /// The constant sign carrying `code`, if any.
    #[inline]
    pub fn sign(&self, code: u64) -> Option<char> {
        self.inverse.get(&code).copied()
    }

    /// Whether `sign` belongs to the constant alphabet.
    #[inline]
    pub fn contains(&self, sign: char) -> bool {
        self.forward.contains_key(&sign)
    }

    /// The largest code in the table; variable primes start above it.
    #[inline]
    pub fn max_code(&self) -> u64 {
        self.max_code
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Iterate over the constant alphabet.
    pub fn signs(&self) -> impl Iterator<Item = char> + '_ {
        self.forward.keys().copied()
    }
}
