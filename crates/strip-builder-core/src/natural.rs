//! Natural ("human") ordering of frame file names.
//!
//! A name is split on runs of ASCII digits, keeping the runs, so the key always
//! starts with a (possibly empty) text token and then alternates number, text:
//! `"f10.png"` -> `["f", 10, ".png"]`, `"10a"` -> `["", 10, "a"]`.
//! Text is compared case-insensitively and numbers by value, so `f9 < f10`
//! regardless of zero padding.
//!
//! Limitation: ordering is only meaningful between names that follow the same
//! pattern (`f<N>`, `name<NN>`). Names with unrelated shapes in one folder get a
//! deterministic but otherwise unspecified order.

use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;

fn digit_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+").expect("static pattern"))
}

/// One run of a natural sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Lower-cased non-digit run (may be empty at the edges).
    Text(String),
    /// Digit run with leading zeros stripped; compared by value.
    Num(String),
}

impl Token {
    fn num(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        Token::Num(trimmed.to_string())
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            // Arbitrary-length integers: fewer significant digits is smaller.
            (Token::Num(a), Token::Num(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            // Unreachable for keys built by `natural_key` (kinds alternate by position).
            (Token::Num(_), Token::Text(_)) => Ordering::Less,
            (Token::Text(_), Token::Num(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Natural sort key of a file name. Compares element-wise, shorter prefix first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(pub Vec<Token>);

/// Builds the natural sort key for `name`.
pub fn natural_key(name: &str) -> NaturalKey {
    let mut tokens = Vec::new();
    let mut last = 0;
    for m in digit_runs().find_iter(name) {
        tokens.push(Token::Text(name[last..m.start()].to_lowercase()));
        tokens.push(Token::num(m.as_str()));
        last = m.end();
    }
    tokens.push(Token::Text(name[last..].to_lowercase()));
    NaturalKey(tokens)
}

/// Compares two names by their natural sort keys.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}
