//! The rule compiler: a bounded pushdown automaton over digest nibbles.
//!
//! ## Compilation pipeline
//!
//! 1. **Decode** — split the digest into header fields and nibbles
//!    ([`crate::digest::decode_digest`]).
//! 2. **Rectify** — specialize both transition tables to the in-use
//!    alphabet ([`crate::table::rectified_pair`]).
//! 3. **Compile** — for each letter, walk that letter's nibble slice
//!    through the tables from the start state, honoring the
//!    stack-balance counter and the stop marker.
//! 4. **Balance** — append one pop per outstanding push, so every
//!    compiled rule is bracket-balanced by construction.
//! 5. **Simplify** — elide semantically-inert substructure
//!    ([`crate::simplify::simplify`]).
//! 6. **Seed** — fold the leftover nibbles onto the alphabet.

use tracing::debug;

use crate::digest::{decode_digest, digest_input, DigestFields, DIGEST_LEN, RULE_NIBBLES};
use crate::lsystem::{Grammar, Plant};
use crate::palette::PALETTE;
use crate::simplify::simplify;
use crate::symbol::Symbol;
use crate::table::{rectified_pair, TableVariant, TransitionTable};

/// Maximum symbols the automaton emits per rule. Balance pops appended
/// afterwards may push a rule past this.
pub const RULE_SIZE_MAX: usize = 15;

/// Knobs the caller can set per compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Which hand-authored table set to use.
    pub variant: TableVariant,
    /// Tip-only flowering: install an empty rule for the mark symbol,
    /// so a flower survives only the generation that produced it.
    pub tip_flowers: bool,
}

/// Hash `input` and compile the resulting digest into a [`Plant`].
pub fn compile_input(input: &str, options: CompileOptions) -> Plant {
    compile(&digest_input(input), options)
}

/// Compile a 32-byte digest into a [`Plant`].
///
/// Total: every bit pattern yields a structurally valid plant. The
/// same digest and options always yield an identical plant.
pub fn compile(digest: &[u8; DIGEST_LEN], options: CompileOptions) -> Plant {
    let fields = decode_digest(digest);
    let DigestFields {
        symbol_count,
        color_index,
        ref rule_nibbles,
        ref seed_nibbles,
    } = fields;

    let (empty_stack, nonempty_stack) = rectified_pair(options.variant, symbol_count);

    // Each letter owns a fixed slice of the rule nibbles. With at most
    // 7 letters the partition is at least 8 nibbles wide.
    let partition = RULE_NIBBLES / symbol_count as usize;
    let take = partition.min(RULE_SIZE_MAX);

    let mut grammar = Grammar::new();
    for ordinal in 0..symbol_count {
        let start = ordinal as usize * partition;
        let slice = &rule_nibbles[start..start + take];
        let raw = compile_rule(slice, &empty_stack, &nonempty_stack);
        grammar.insert(Symbol::Letter(ordinal), simplify(&raw));
    }

    if options.tip_flowers {
        grammar.insert(Symbol::Mark, Vec::new());
    }

    let seed = extract_seed(seed_nibbles, symbol_count);
    let color = PALETTE[usize::from(color_index)];

    debug!(
        symbol_count,
        color_index,
        color,
        variant = ?options.variant,
        "compiled plant grammar"
    );

    Plant::new(grammar, seed, color)
}

/// Run the automaton over one letter's nibble slice.
fn compile_rule(
    nibbles: &[u8],
    empty_stack: &TransitionTable,
    nonempty_stack: &TransitionTable,
) -> Vec<Symbol> {
    let mut state = Symbol::Start;
    let mut depth = 0usize;
    let mut rule = Vec::with_capacity(nibbles.len());

    for &nibble in nibbles {
        let table = if depth == 0 { empty_stack } else { nonempty_stack };
        let next = table.next(state, nibble);

        if next == Symbol::Stop {
            // The nibble is consumed but contributes nothing.
            break;
        }
        match next {
            Symbol::Push => depth += 1,
            // Pops only occur in the non-empty-stack table, so depth
            // cannot underflow.
            Symbol::Pop => depth -= 1,
            _ => {}
        }
        rule.push(next);
        state = next;
    }

    // Force balance: close every outstanding push.
    rule.extend(std::iter::repeat(Symbol::Pop).take(depth));
    rule
}

/// Fold the seed nibbles onto the in-use alphabet: one letter per
/// nibble, letters only.
fn extract_seed(seed_nibbles: &[u8], symbol_count: u8) -> Vec<Symbol> {
    seed_nibbles
        .iter()
        .map(|&n| Symbol::Letter(n % symbol_count))
        .collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
