//! Configuration of the formal language: alphabets, pools, and sieve bound.

use strum::{EnumIs, EnumIter, IntoStaticStr};

use crate::error::Result;
use crate::signs::SignTable;

/// Default upper bound for the prime sieve.
///
/// An expression can only have as many tokens as there are primes below this
/// bound, so it caps the maximum expression length (and the number of distinct
/// variables). Raising it trades startup time and memory for capacity.
pub const DEFAULT_PRIME_BOUND: usize = 10_000;

/// Default tick marker appended to a base letter once its pool cycles.
pub const DEFAULT_TICK: char = '`';

/// The three variable classes of the notation.
///
/// The class decides the shape of a fresh variable's code: the underlying
/// prime itself, its square, or its cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum VarClass {
    Numerical,
    Sentential,
    Predicate,
}

impl VarClass {
    /// Exponent applied to a freshly assigned prime for this class.
    #[inline]
    pub fn power(self) -> u32 {
        match self {
            VarClass::Numerical => 1,
            VarClass::Sentential => 2,
            VarClass::Predicate => 3,
        }
    }
}

/// The configurable surface of the codec, fixed at initialization.
///
/// The [`Default`] value reproduces the notation of *Gödel's Proof* (Nagel &
/// Newman): twelve constant signs with codes 1 through 12, variable pools
/// `x y z` / `p q r` / `P Q R`, and a backtick tick marker.
#[derive(Debug, Clone)]
pub struct Language {
    tick: char,
    numerical: Vec<char>,
    sentential: Vec<char>,
    predicate: Vec<char>,
    signs: SignTable,
    prime_bound: usize,
}

impl Language {
    /// Assemble a language from its parts.
    ///
    /// Fails only if the sign table itself is malformed; cross-alphabet
    /// disjointness is checked when a [`Numbering`](crate::Numbering) is
    /// built from the language.
    pub fn new(
        tick: char,
        numerical: impl IntoIterator<Item = char>,
        sentential: impl IntoIterator<Item = char>,
        predicate: impl IntoIterator<Item = char>,
        signs: impl IntoIterator<Item = (char, u64)>,
        prime_bound: usize,
    ) -> Result<Self> {
        Ok(Self {
            tick,
            numerical: numerical.into_iter().collect(),
            sentential: sentential.into_iter().collect(),
            predicate: predicate.into_iter().collect(),
            signs: SignTable::new(signs)?,
            prime_bound,
        })
    }

    /// The default language with a different sieve bound.
    pub fn with_prime_bound(bound: usize) -> Self {
        Self {
            prime_bound: bound,
            ..Self::default()
        }
    }

    /// The tick marker character.
    #[inline]
    pub fn tick(&self) -> char {
        self.tick
    }

    /// The ordered letter pool of a variable class.
    #[inline]
    pub fn pool(&self, class: VarClass) -> &[char] {
        match class {
            VarClass::Numerical => &self.numerical,
            VarClass::Sentential => &self.sentential,
            VarClass::Predicate => &self.predicate,
        }
    }

    /// The constant-sign bijection.
    #[inline]
    pub fn signs(&self) -> &SignTable {
        &self.signs
    }

    /// Upper bound handed to the prime sieve.
    #[inline]
    pub fn prime_bound(&self) -> usize {
        self.prime_bound
    }

    /// The variable class whose pool contains `letter`, if any.
    pub fn classify(&self, letter: char) -> Option<VarClass> {
        if self.numerical.contains(&letter) {
            Some(VarClass::Numerical)
        } else if self.sentential.contains(&letter) {
            Some(VarClass::Sentential)
        } else if self.predicate.contains(&letter) {
            Some(VarClass::Predicate)
        } else {
            None
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        // Constant signs of the text, page 70 in the 2001 edition.
        let signs = SignTable::new([
            ('~', 1),
            ('∨', 2),
            ('⊃', 3),
            ('∃', 4),
            ('=', 5),
            ('0', 6),
            ('s', 7),
            ('(', 8),
            (')', 9),
            (',', 10),
            ('+', 11),
            ('×', 12),
        ])
        .expect("the built-in sign table has distinct signs and codes");

        Self {
            tick: DEFAULT_TICK,
            numerical: vec!['x', 'y', 'z'],
            sentential: vec!['p', 'q', 'r'],
            predicate: vec!['P', 'Q', 'R'],
            signs,
            prime_bound: DEFAULT_PRIME_BOUND,
        }
    }
}
