//! Tokenizer for the formal notation.
//!
//! A single explicit left-to-right scan: at each position the next character
//! is either a constant sign or the base letter of one variable pool, and a
//! variable greedily absorbs the run of tick markers that follows. The four
//! alphabets are pairwise disjoint, so no backtracking is ever needed.
//!
//! Scanning is all-or-nothing over the whole input; nothing downstream sees a
//! partial token stream.

use crate::error::{Error, Result};
use crate::language::{Language, VarClass};

/// How many characters of an unmatched remainder end up in a lexical error.
const REMAINDER_PREVIEW: usize = 10;

/// One classified token, borrowing its lexeme from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'s> {
    /// A constant sign together with its fixed code.
    Sign(char, u64),
    /// A variable occurrence: one pool letter plus zero or more ticks.
    Var(VarClass, &'s str),
}

/// Scan `input` into its full token sequence, left to right.
///
/// Fails with [`Error::Lexical`] carrying a truncated preview of the
/// remainder if any suffix cannot be classified.
pub fn scan<'s>(lang: &Language, input: &'s str) -> Result<Vec<Token<'s>>> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        if let Some(code) = lang.signs().code(c) {
            tokens.push(Token::Sign(c, code));
            rest = &rest[c.len_utf8()..];
            continue;
        }

        if let Some(class) = lang.classify(c) {
            let mut end = c.len_utf8();
            for t in rest[end..].chars() {
                if t != lang.tick() {
                    break;
                }
                end += t.len_utf8();
            }
            tokens.push(Token::Var(class, &rest[..end]));
            rest = &rest[end..];
            continue;
        }

        let near: String = rest.chars().take(REMAINDER_PREVIEW).collect();
        return Err(Error::Lexical { near });
    }

    Ok(tokens)
}
