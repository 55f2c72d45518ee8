//! `verdant-file` — plant-file persistence.
//!
//! A compiled plant round-trips through a small human-readable text
//! format: one `letter : rule` line per in-use letter, a blank
//! separator line, the seed line, then the color line.
//!
//! ```text
//! A : ACB
//! B : [+B@]C[+C[+BBBA]]
//! C : B-C[+CC[+AABAAA]]
//!
//! ACCB
//! #FF5E5E
//! ```
//!
//! Reading is lenient where old files require it (legacy `.` start
//! markers inside rule bodies are stripped with a warning) and strict
//! everywhere else: a missing separator, seed, or color line is a
//! recoverable [`PlantFileError`], never a panic.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use verdant_grammar::{symbols_to_string, Grammar, Plant, Symbol};

/// Failure modes of reading or writing a plant file.
#[derive(Debug, Error)]
pub enum PlantFileError {
    // ── I/O ───────────────────────────────────────────────

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // ── Format errors ─────────────────────────────────────

    #[error("malformed rule line '{line}' — expected 'letter : rule'")]
    MalformedRule { line: String },

    #[error("unknown symbol '{symbol}' in {context}")]
    UnknownSymbol { symbol: char, context: &'static str },

    #[error("rule head '{head}' is not an alphabet letter")]
    BadRuleHead { head: char },

    #[error("missing seed line after the blank separator")]
    MissingSeed,

    #[error("missing color line after the seed")]
    MissingColor,
}

/// Render a plant in the persisted text format.
pub fn format_plant(plant: &Plant) -> String {
    let mut out = String::new();
    for head in plant.grammar().heads() {
        let body = plant.grammar().rule(head).unwrap_or(&[]);
        // write! to a String cannot fail.
        let _ = writeln!(out, "{} : {}", head, symbols_to_string(body));
    }
    out.push('\n');
    let _ = writeln!(out, "{}", symbols_to_string(plant.seed()));
    out.push_str(plant.color());
    out
}

/// Parse the persisted text format back into a [`Plant`] at
/// generation 0.
pub fn parse_plant(text: &str) -> Result<Plant, PlantFileError> {
    let mut lines = text.lines();
    let mut grammar = Grammar::new();

    // Rule lines run until the blank separator.
    for line in lines.by_ref() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        let (head, body) = line
            .split_once(':')
            .ok_or_else(|| PlantFileError::MalformedRule { line: line.to_string() })?;

        let head = head.trim();
        let mut head_chars = head.chars();
        let head_char = head_chars
            .next()
            .filter(|_| head_chars.next().is_none())
            .ok_or_else(|| PlantFileError::MalformedRule { line: line.to_string() })?;
        let head_sym = Symbol::from_char(head_char)
            .filter(|s| s.is_letter() || *s == Symbol::Mark)
            .ok_or(PlantFileError::BadRuleHead { head: head_char })?;

        grammar.insert(head_sym, parse_rule_body(body.trim())?);
    }

    let seed_line = lines.next().ok_or(PlantFileError::MissingSeed)?.trim();
    if seed_line.is_empty() {
        return Err(PlantFileError::MissingSeed);
    }
    let seed = verdant_grammar::parse_symbols(seed_line)
        .map_err(|symbol| PlantFileError::UnknownSymbol { symbol, context: "seed" })?;

    let color_line = lines.next().ok_or(PlantFileError::MissingColor)?.trim();
    if color_line.is_empty() {
        return Err(PlantFileError::MissingColor);
    }

    Ok(Plant::new(grammar, seed, color_line))
}

/// Parse one rule body, dropping legacy `.` start markers that very old
/// files carry inside rules.
fn parse_rule_body(body: &str) -> Result<Vec<Symbol>, PlantFileError> {
    let mut symbols = Vec::with_capacity(body.len());
    for c in body.chars() {
        let sym = Symbol::from_char(c)
            .ok_or(PlantFileError::UnknownSymbol { symbol: c, context: "rule" })?;
        if sym == Symbol::Start {
            warn!("dropping legacy '.' marker from stored rule");
            continue;
        }
        symbols.push(sym);
    }
    Ok(symbols)
}

/// Write `plant` to `path` in the persisted text format.
pub fn write_plant(path: impl AsRef<Path>, plant: &Plant) -> Result<(), PlantFileError> {
    let path = path.as_ref();
    fs::write(path, format_plant(plant))?;
    debug!(path = %path.display(), "wrote plant file");
    Ok(())
}

/// Read a plant file from `path`.
pub fn read_plant(path: impl AsRef<Path>) -> Result<Plant, PlantFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let plant = parse_plant(&text)?;
    debug!(path = %path.display(), letters = plant.symbol_count(), "read plant file");
    Ok(plant)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
