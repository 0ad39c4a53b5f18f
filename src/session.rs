//! Per-call variable-assignment state.
//!
//! Every `encode` or `decode` call owns a fresh session; nothing here
//! survives the call. Each variable class keeps its own map, and a class
//! never reads another class's count when assigning codes or names.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::language::{Language, VarClass};
use crate::primes::Primes;

/// Encode-direction state: lexeme → assigned code, one map per class.
#[derive(Debug, Default)]
pub struct EncodeSession {
    numerical: HashMap<String, u64>,
    sentential: HashMap<String, u64>,
    predicate: HashMap<String, u64>,
}

impl EncodeSession {
    /// The code for a variable occurrence.
    ///
    /// A lexeme already seen this session keeps its code. A fresh lexeme is
    /// assigned `prime[offset + n]` raised to the class power, where `n` is
    /// the number of lexemes this class has already assigned.
    pub fn code_for(
        &mut self,
        class: VarClass,
        lexeme: &str,
        primes: &Primes,
        offset: usize,
    ) -> Result<u64> {
        let map = self.map_mut(class);
        if let Some(&code) = map.get(lexeme) {
            return Ok(code);
        }

        let index = offset + map.len();
        let prime = primes.get(index).ok_or(Error::PrimesExhausted {
            required: index + 1,
            available: primes.len(),
        })?;
        let code = prime.pow(class.power());
        map.insert(lexeme.to_owned(), code);
        Ok(code)
    }

    fn map_mut(&mut self, class: VarClass) -> &mut HashMap<String, u64> {
        match class {
            VarClass::Numerical => &mut self.numerical,
            VarClass::Sentential => &mut self.sentential,
            VarClass::Predicate => &mut self.predicate,
        }
    }
}

/// Decode-direction state: code → generated lexeme, one map per class.
#[derive(Debug, Default)]
pub struct DecodeSession {
    numerical: HashMap<u64, String>,
    sentential: HashMap<u64, String>,
    predicate: HashMap<u64, String>,
}

impl DecodeSession {
    /// The lexeme for a variable code.
    ///
    /// A code already seen this session keeps its lexeme. A fresh code gets
    /// the next name drawn from the class's pool, cycling through the pool
    /// with one more tick per full cycle.
    pub fn name_for(&mut self, class: VarClass, code: u64, lang: &Language) -> String {
        let map = self.map_mut(class);
        if let Some(name) = map.get(&code) {
            return name.clone();
        }

        let name = next_name(map.len(), lang.pool(class), lang.tick());
        map.insert(code, name.clone());
        name
    }

    fn map_mut(&mut self, class: VarClass) -> &mut HashMap<u64, String> {
        match class {
            VarClass::Numerical => &mut self.numerical,
            VarClass::Sentential => &mut self.sentential,
            VarClass::Predicate => &mut self.predicate,
        }
    }
}

/// The lexeme of the `assigned`-th distinct symbol drawn from `pool`:
/// base letter `pool[assigned mod K]` followed by `assigned div K` ticks.
fn next_name(assigned: usize, pool: &[char], tick: char) -> String {
    let ticks = assigned / pool.len();
    let mut name = String::with_capacity(1 + ticks);
    name.push(pool[assigned % pool.len()]);
    for _ in 0..ticks {
        name.push(tick);
    }
    name
}
