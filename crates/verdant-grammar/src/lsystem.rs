//! L-system rewriter: the compiled grammar applied generation by
//! generation.
//!
//! [`Grammar`] is the immutable letter→rule mapping; [`Plant`] pairs a
//! grammar with its seed, flower color, and the single mutable piece of
//! state — the current generation string. History is not retained.

use std::collections::BTreeMap;

use crate::symbol::{symbols_to_string, Symbol};

// ─────────────────────────────────────────────
// Grammar
// ─────────────────────────────────────────────

/// The compiled letter→rule mapping.
///
/// Any symbol without an entry is terminal and rewrites to itself —
/// operators and marks are terminal by construction (tip-only flowering
/// adds an explicit empty rule for the mark symbol to make flowers
/// vanish after one generation).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    rules: BTreeMap<Symbol, Vec<Symbol>>,
}

impl Grammar {
    pub fn new() -> Grammar {
        Grammar::default()
    }

    /// Install (or replace) the rule for `head`.
    pub fn insert(&mut self, head: Symbol, body: Vec<Symbol>) {
        self.rules.insert(head, body);
    }

    /// The rule for `sym`, if it has one.
    pub fn rule(&self, sym: Symbol) -> Option<&[Symbol]> {
        self.rules.get(&sym).map(Vec::as_slice)
    }

    /// Rule heads in deterministic (alphabet) order.
    pub fn heads(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.rules.keys().copied()
    }

    /// Number of in-use alphabet letters (rule heads that are letters).
    pub fn letter_count(&self) -> u8 {
        self.rules.keys().filter(|s| s.is_letter()).count() as u8
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply the grammar once: every mapped symbol is replaced by its
    /// rule body, every unmapped symbol copies through unchanged.
    ///
    /// Produces a new string; neither the grammar nor `current` is
    /// mutated. Growth is unbounded — a recursive letter can multiply
    /// the length every generation, so callers cap the generation
    /// count, not this function.
    pub fn advance(&self, current: &[Symbol]) -> Vec<Symbol> {
        let mut next = Vec::with_capacity(current.len());
        for &sym in current {
            match self.rules.get(&sym) {
                Some(body) => next.extend_from_slice(body),
                None => next.push(sym),
            }
        }
        next
    }
}

// ─────────────────────────────────────────────
// Plant
// ─────────────────────────────────────────────

/// A compiled plant: grammar, seed, flower color, and the current
/// generation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    grammar: Grammar,
    seed: Vec<Symbol>,
    color: String,
    state: Vec<Symbol>,
    generation: u32,
}

impl Plant {
    /// Wrap a compiled grammar at generation 0 (state = seed).
    pub fn new(grammar: Grammar, seed: Vec<Symbol>, color: impl Into<String>) -> Plant {
        let state = seed.clone();
        Plant {
            grammar,
            seed,
            color: color.into(),
            state,
            generation: 0,
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn seed(&self) -> &[Symbol] {
        &self.seed
    }

    /// Flower color as an RGB hex triple string, e.g. `#FF7FED`.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// In-use alphabet size, in `2..=7` for compiled plants.
    pub fn symbol_count(&self) -> u8 {
        self.grammar.letter_count()
    }

    /// The current generation string.
    pub fn state(&self) -> &[Symbol] {
        &self.state
    }

    /// The current generation string as text.
    pub fn state_string(&self) -> String {
        symbols_to_string(&self.state)
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Rewrite the current state once and return the new state.
    pub fn step(&mut self) -> &[Symbol] {
        self.state = self.grammar.advance(&self.state);
        self.generation += 1;
        &self.state
    }

    /// Advance forward until `generation` is reached. A target at or
    /// below the current generation is a no-op (the rewriter only runs
    /// forward; use [`reset`](Plant::reset) to start over).
    pub fn advance_to(&mut self, generation: u32) {
        while self.generation < generation {
            self.step();
        }
    }

    /// Back to generation 0.
    pub fn reset(&mut self) {
        self.state = self.seed.clone();
        self.generation = 0;
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
