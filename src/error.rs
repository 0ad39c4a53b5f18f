//! Error types shared across the crate.

use num_bigint::BigUint;
use strum::EnumIs;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, EnumIs, Error)]
pub enum Error {
    /// The input string contains a substring no token class matches.
    ///
    /// `near` holds at most the first ten characters of the unmatched
    /// remainder, enough to locate the offending position.
    #[error("error lexing input near `{near}`")]
    Lexical { near: String },

    /// The grouped factorization does not walk the prime list consecutively.
    #[error(
        "not a Gödel number: prime at index {position} is {found} but should be {expected}"
    )]
    UnexpectedPrime {
        position: usize,
        found: BigUint,
        expected: u64,
    },

    /// A per-position exponent matches no symbol shape.
    #[error("{code} is not a constant-sign code, a prime, a prime squared, or a prime cubed")]
    UnclassifiableCode { code: u64 },

    /// Two constant signs were mapped to the same code.
    #[error("duplicate code {code} found while building the constant-sign table")]
    DuplicateSignCode { code: u64 },

    /// The same constant sign appears twice in the table definition.
    #[error("duplicate sign `{sign}` found while building the constant-sign table")]
    DuplicateSign { sign: char },

    /// A character belongs to more than one alphabet, making the scan ambiguous.
    #[error("the variable pools and the constant alphabet must be pairwise disjoint, but `{sign}` appears in more than one")]
    OverlappingAlphabets { sign: char },

    /// A variable pool has no letters to draw from.
    #[error("the {class} variable pool is empty")]
    EmptyPool { class: &'static str },

    /// The tick marker collides with an alphabet character.
    #[error("the tick marker `{tick}` must not appear in any alphabet")]
    TickInAlphabet { tick: char },

    /// Factorization is only defined for positive integers.
    #[error("cannot factor zero: the argument must be a positive integer")]
    FactorOfZero,

    /// The expression needs more primes than were sieved at initialization.
    #[error(
        "expression requires {required} primes but only {available} were sieved; raise the prime bound"
    )]
    PrimesExhausted { required: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
