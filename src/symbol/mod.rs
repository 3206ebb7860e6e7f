//! Button colors
//!
//! The four symbols a sequence is made of, plus parsing from player input.

use crate::error::{Result, SimonError};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// One colored button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Symbol {
    /// Every symbol, in button order
    pub const ALL: [Symbol; 4] = [Symbol::Red, Symbol::Blue, Symbol::Green, Symbol::Yellow];

    /// Pick a symbol uniformly at random
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Lowercase color name
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Red => "red",
            Symbol::Blue => "blue",
            Symbol::Green => "green",
            Symbol::Yellow => "yellow",
        }
    }

    /// Parse a whitespace separated line such as `r g b` into symbols
    pub fn parse_line(line: &str) -> Result<Vec<Symbol>> {
        line.split_whitespace().map(str::parse).collect()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbol {
    type Err = SimonError;

    /// Accepts the full name or its first letter, any case
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Symbol::ALL
            .into_iter()
            .find(|symbol| {
                let name = symbol.name();
                lower == name || (lower.len() == 1 && name.starts_with(lower.as_str()))
            })
            .ok_or_else(|| SimonError::UnknownSymbol(s.trim().to_string()))
    }
}
