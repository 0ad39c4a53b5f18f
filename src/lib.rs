//! Godelnum: encode and decode Gödel numbers for a small formal notation.
//!
//! This crate implements the numbering described in *Gödel's Proof* (Nagel &
//! Newman): a string over a formal arithmetic alphabet maps to one integer
//! and back, losslessly, through unique prime factorization.
//!
//! How the numbering works
//! - Every symbol occurrence gets a positive code: constant signs keep fixed
//!   small codes; each new numerical, sentential, or predicate variable gets
//!   the next unused prime, squared, or cubed respectively.
//! - The string's Gödel number is `∏ prime[i] ^ code[i]` over token
//!   positions, so factoring recovers the codes and with them the symbols.
//! - Decoding renames variables deterministically, cycling through each
//!   class's letter pool and appending a tick marker per full cycle, so
//!   `decode(encode(s)) == s` for any string the tokenizer accepts.
//!
//! Two pure functions form the convenient surface:
//!
//! ```
//! use num_bigint::BigUint;
//!
//! let n = godelnum::encode("0=0").unwrap();
//! assert_eq!(n, BigUint::from(64u32 * 243 * 15625)); // 2^6 * 3^5 * 5^6
//! assert_eq!(godelnum::decode(&n).unwrap(), "0=0");
//! ```
//!
//! Both delegate to a process-wide [`Numbering`] built from
//! [`Language::default`] on first use; the sieve bound can be overridden once
//! at initialization through the `GODEL_PRIME_BOUND` environment variable.
//! Hosts that want a different alphabet build their own [`Language`] and
//! [`Numbering`].
//!
//! Each call owns all of its mutable state, so one `Numbering` may serve
//! concurrent calls without locking.

pub mod error;
pub mod factor;
pub mod language;
pub mod lexer;
pub mod numbering;
pub mod primes;
pub mod session;
pub mod signs;

use num_bigint::BigUint;
use once_cell::sync::Lazy;

pub use crate::error::{Error, Result};
pub use crate::language::{DEFAULT_PRIME_BOUND, DEFAULT_TICK, Language, VarClass};
pub use crate::numbering::Numbering;
pub use crate::primes::Primes;
pub use crate::signs::SignTable;

/// Environment variable overriding the default sieve bound.
pub const PRIME_BOUND_ENV: &str = "GODEL_PRIME_BOUND";

static DEFAULT: Lazy<Numbering> = Lazy::new(|| {
    let bound = std::env::var(PRIME_BOUND_ENV)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_PRIME_BOUND);
    Numbering::new(Language::with_prime_bound(bound))
        .expect("the default language is a valid configuration")
});

/// Encode `text` with the default [`Language`].
///
/// See [`Numbering::encode`].
pub fn encode(text: &str) -> Result<BigUint> {
    DEFAULT.encode(text)
}

/// Decode `number` with the default [`Language`].
///
/// See [`Numbering::decode`].
pub fn decode(number: &BigUint) -> Result<String> {
    DEFAULT.decode(number)
}
