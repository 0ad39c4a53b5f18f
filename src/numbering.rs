//! The encode/decode context and the two codec operations.

use std::collections::HashSet;

use log::debug;
use num_bigint::BigUint;
use num_traits::{One, Pow, Zero};
use strum::IntoEnumIterator;

use crate::error::{Error, Result};
use crate::factor::{factor, factor_u64, group};
use crate::language::{Language, VarClass};
use crate::lexer::{Token, scan};
use crate::primes::Primes;
use crate::session::{DecodeSession, EncodeSession};

/// A Gödel-numbering context: the language plus its sieved primes.
///
/// Built once, immutable afterwards. `encode` and `decode` allocate all of
/// their mutable state per call, so a shared `Numbering` can serve any number
/// of concurrent calls without locking.
#[derive(Debug, Clone)]
pub struct Numbering {
    lang: Language,
    primes: Primes,
    /// Index of the first prime strictly above every constant-sign code.
    offset: usize,
}

impl Numbering {
    /// Validate `lang`, sieve its primes, and build the context.
    ///
    /// The three variable pools and the constant alphabet must be pairwise
    /// disjoint (this is what makes the scan unambiguous), every pool must be
    /// non-empty, and the tick marker must not collide with any alphabet.
    pub fn new(lang: Language) -> Result<Self> {
        let mut seen = HashSet::new();
        for class in VarClass::iter() {
            let pool = lang.pool(class);
            if pool.is_empty() {
                return Err(Error::EmptyPool {
                    class: class.into(),
                });
            }
            for &letter in pool {
                if !seen.insert(letter) {
                    return Err(Error::OverlappingAlphabets { sign: letter });
                }
            }
        }
        for sign in lang.signs().signs() {
            if !seen.insert(sign) {
                return Err(Error::OverlappingAlphabets { sign });
            }
        }
        if seen.contains(&lang.tick()) {
            return Err(Error::TickInAlphabet { tick: lang.tick() });
        }

        let primes = Primes::below(lang.prime_bound());
        let offset = primes.count_at_most(lang.signs().max_code());
        debug!(
            "sieved {} primes below {}; variable codes start at prime index {}",
            primes.len(),
            lang.prime_bound(),
            offset
        );
        Ok(Self {
            lang,
            primes,
            offset,
        })
    }

    /// The language this context was built from.
    #[inline]
    pub fn language(&self) -> &Language {
        &self.lang
    }

    /// The sieved prime table.
    #[inline]
    pub fn primes(&self) -> &Primes {
        &self.primes
    }

    /// Encode a string of the formal notation as its Gödel number.
    ///
    /// The empty string encodes to 0. Each token's code becomes the exponent
    /// of the next prime, and the result is the product of those prime
    /// powers. Fails with [`Error::Lexical`] if any part of the input cannot
    /// be tokenized, before any code is assigned.
    pub fn encode(&self, text: &str) -> Result<BigUint> {
        if text.is_empty() {
            return Ok(BigUint::zero());
        }

        let tokens = scan(&self.lang, text)?;
        let mut session = EncodeSession::default();
        let mut encoding = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let code = match *token {
                Token::Sign(_, code) => code,
                Token::Var(class, lexeme) => {
                    session.code_for(class, lexeme, &self.primes, self.offset)?
                }
            };
            encoding.push(code);
        }

        let mut number = BigUint::one();
        for (position, &code) in encoding.iter().enumerate() {
            let prime = self.primes.get(position).ok_or(Error::PrimesExhausted {
                required: position + 1,
                available: self.primes.len(),
            })?;
            number *= Pow::pow(BigUint::from(prime), code);
        }
        debug!(
            "encoded {} tokens into a {}-bit number",
            tokens.len(),
            number.bits()
        );
        Ok(number)
    }

    /// Decode a Gödel number back into its string.
    ///
    /// Zero decodes to the empty string. The number's factorization must use
    /// exactly the consecutive primes `2, 3, 5, …` with no omissions; each
    /// exponent must be a constant-sign code, a bare sieved prime, a prime
    /// squared, or a prime cubed. Anything else is a structural error.
    pub fn decode(&self, number: &BigUint) -> Result<String> {
        if number.is_zero() {
            return Ok(String::new());
        }

        let factors = factor(number)?;
        let groups = group(&factors);
        debug!("decoding a {}-bit number with {} positions", number.bits(), groups.len());

        let mut session = DecodeSession::default();
        let mut text = String::new();
        for (position, (found, code)) in groups.into_iter().enumerate() {
            let expected = self.primes.get(position).ok_or(Error::PrimesExhausted {
                required: position + 1,
                available: self.primes.len(),
            })?;
            if found != BigUint::from(expected) {
                return Err(Error::UnexpectedPrime {
                    position,
                    found,
                    expected,
                });
            }
            self.push_symbol(&mut text, code, &mut session)?;
        }
        Ok(text)
    }

    /// Classify one position's code and append the recovered symbol.
    fn push_symbol(
        &self,
        text: &mut String,
        code: u64,
        session: &mut DecodeSession,
    ) -> Result<()> {
        if let Some(sign) = self.lang.signs().sign(code) {
            text.push(sign);
            return Ok(());
        }

        if self.primes.contains(code) {
            text.push_str(&session.name_for(VarClass::Numerical, code, &self.lang));
            return Ok(());
        }

        let factors = factor_u64(code);
        let uniform = factors.windows(2).all(|pair| pair[0] == pair[1]);
        let class = match factors.len() {
            2 if uniform && self.primes.contains(factors[0]) => VarClass::Sentential,
            3 if uniform && self.primes.contains(factors[0]) => VarClass::Predicate,
            _ => return Err(Error::UnclassifiableCode { code }),
        };
        text.push_str(&session.name_for(class, code, &self.lang));
        Ok(())
    }
}
