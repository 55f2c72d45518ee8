//! Tagged symbol alphabet shared by the automaton, the simplifier, and
//! the rewriter.
//!
//! Every character the original drawing language understands is one
//! [`Symbol`] variant, so invalid symbols are unrepresentable and table
//! lookups are keyed by the enum rather than by raw characters.
//!
//! ## Rendering meaning (for the out-of-scope renderer)
//!
//! | Symbol        | Char | Effect                                           |
//! |---------------|------|--------------------------------------------------|
//! | `Letter(n)`   | A..G | Move forward drawing a line                      |
//! | `TurnLeft`    | `+`  | Turn left by the running angle                   |
//! | `TurnRight`   | `-`  | Turn right by the running angle                  |
//! | `Push`        | `[`  | Push heading/position/toggle/angle on the stack  |
//! | `Pop`         | `]`  | Pop and restore drawing state                    |
//! | `Mark`        | `@`  | Draw a filled dot in the flower color            |
//! | `SwapSign`    | `&`  | Swap the meaning of `+` and `-`                  |
//! | `AngleDec`    | `(`  | Decrement the running angle offset               |
//! | `AngleInc`    | `)`  | Increment the running angle offset               |
//! | `Start`       | `.`  | Automaton start state — never rendered           |
//! | `Stop`        | `~`  | Automaton force-stop — never rendered            |

use serde::{Deserialize, Serialize};

/// Maximum number of alphabet letters a grammar can use.
pub const MAX_LETTERS: u8 = 7;

/// One symbol of the plant language.
///
/// `Letter` ordinals are 0-based positions in the `A..G` superset;
/// only ordinals below the in-use `symbol_count` appear in compiled
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    Letter(u8),
    TurnLeft,
    TurnRight,
    Push,
    Pop,
    Mark,
    SwapSign,
    AngleDec,
    AngleInc,
    Start,
    Stop,
}

impl Symbol {
    /// Parse one character of the original textual language.
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            'A'..='G' => Some(Symbol::Letter(c as u8 - b'A')),
            '+' => Some(Symbol::TurnLeft),
            '-' => Some(Symbol::TurnRight),
            '[' => Some(Symbol::Push),
            ']' => Some(Symbol::Pop),
            '@' => Some(Symbol::Mark),
            '&' => Some(Symbol::SwapSign),
            '(' => Some(Symbol::AngleDec),
            ')' => Some(Symbol::AngleInc),
            '.' => Some(Symbol::Start),
            '~' => Some(Symbol::Stop),
            _ => None,
        }
    }

    /// The character this symbol prints as in rules, seeds, and files.
    pub fn to_char(self) -> char {
        match self {
            Symbol::Letter(n) => {
                debug_assert!(n < MAX_LETTERS, "letter ordinal {n} out of range");
                (b'A' + n) as char
            }
            Symbol::TurnLeft => '+',
            Symbol::TurnRight => '-',
            Symbol::Push => '[',
            Symbol::Pop => ']',
            Symbol::Mark => '@',
            Symbol::SwapSign => '&',
            Symbol::AngleDec => '(',
            Symbol::AngleInc => ')',
            Symbol::Start => '.',
            Symbol::Stop => '~',
        }
    }

    /// `true` for alphabet letters (the only symbols with rewrite rules
    /// by default).
    pub fn is_letter(self) -> bool {
        matches!(self, Symbol::Letter(_))
    }

    /// `true` for operators with no visible drawing effect of their own:
    /// turns, the left/right swap, and the angle-offset adjusters.
    ///
    /// A bracketed span containing only these is semantically inert and
    /// is removed by the simplifier. `Mark` draws and is *not* a noop.
    pub fn is_invisible_op(self) -> bool {
        matches!(
            self,
            Symbol::TurnLeft
                | Symbol::TurnRight
                | Symbol::SwapSign
                | Symbol::AngleDec
                | Symbol::AngleInc
        )
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Render a symbol sequence as the original textual language.
pub fn symbols_to_string(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.to_char()).collect()
}

/// Parse a string of the original textual language.
///
/// Returns the first unrecognized character as the error.
pub fn parse_symbols(text: &str) -> Result<Vec<Symbol>, char> {
    text.chars().map(|c| Symbol::from_char(c).ok_or(c)).collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
