//! Hand-authored transition tables and their rectification.
//!
//! Each table row maps a "current symbol" state to 16 candidate next
//! symbols, one per nibble value, so the automaton's "pick next
//! character" is a single O(1) lookup keyed by a uniformly-distributed
//! 4-bit value. The row contents bias the output toward structurally
//! pleasing grammars (e.g. a `-` never directly cancels a `+`) — that
//! tuning lives entirely in the data, not in runtime logic.
//!
//! Two variants exist and are deliberately kept as independent
//! constants rather than derived from one another: the **reduced**
//! variant emits 6 operator kinds (`+ - [ ] @` and stop), the **full**
//! variant adds `& ( )`. Within a variant, one table is consulted while
//! the automaton's stack is empty and the other while it is non-empty.
//!
//! Rows are authored assuming the full 7-letter alphabet;
//! [`rectified_pair`] remaps out-of-range letters onto the in-use
//! alphabet before compilation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Which hand-authored table set to compile with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TableVariant {
    /// 6 operator symbols: turns, brackets, mark, stop.
    #[default]
    Reduced,
    /// 9 operator symbols: reduced plus swap and angle inc/dec.
    Full,
}

/// Raw authored row: state character, then one next-symbol character
/// per nibble value 0..=15.
type RawRow = (char, &'static str);

static EMPTY_STACK_REDUCED: &[RawRow] = &[
    ('.', "ABCDEFGAB[[[[DFG"),
    ('A', "ABCDEFG[[[[[@~+["),
    ('B', "ABCDEFG[[[[[@~[-"),
    ('C', "ABCDEFG[[[[[@~+["),
    ('D', "ABCDEFG[[[[[@~[-"),
    ('E', "ABCDEFG[[[[[@~+["),
    ('F', "ABCDEFG[[[[[@~[-"),
    ('G', "ABCDEFG[[[[[@~+["),
    ('+', "ABCDEFG+A[+D@~+["),
    ('-', "ABCDEFGB-[C-@~[-"),
    (']', "ABCD[[[@@[EF@~G["),
    ('@', "ABCDEFG[[[EFG~+-"),
];

static NONEMPTY_STACK_REDUCED: &[RawRow] = &[
    ('A', "ABCDEFG+-[]A@~]-"),
    ('B', "ABCDE-G+-[]B@~+]"),
    ('C', "ABCD+FG+-[]C@~[-"),
    ('D', "ABC-EFG+-[]D@~+]"),
    ('E', "AB+DEFG+-[]E@~[-"),
    ('F', "A-CDEFG+-[]F@~+]"),
    ('G', "+BCDEFG+-[]G@~]-"),
    ('+', "ABCDEFG+A[BD@E+F"),
    ('-', "ABCDEFGB-[CD@FG-"),
    ('[', "+-+-+-C+-[+-+-+-"),
    (']', "ABCD[[[]-[+-@~[]"),
    ('@', "AB]]]]G+-[+--~+-"),
];

static EMPTY_STACK_FULL: &[RawRow] = &[
    ('.', "ABCDEFGAB[[[[DFG"),
    ('A', "ABCDEFG[[[[[@~&)"),
    ('B', "ABCDEFG[[[[[@~(&"),
    ('C', "ABCDEFG[[[[[@~&)"),
    ('D', "ABCDEFG[[[[[@~(&"),
    ('E', "ABCDEFG[[[[[@~&)"),
    ('F', "ABCDEFG[[[[[@~(&"),
    ('G', "ABCDEFG[[[[[@~&)"),
    ('+', "ABCDEFG+A[+[@~(&"),
    ('-', "ABCDEFGB-[C[@~&)"),
    (']', "ABCD[[[@@[E[@~(&"),
    ('@', "ABCDEFG[[[E[G~&)"),
    ('&', "ABCDEFG+-[[-@~()"),
    ('(', "ABCDEFG+-[[&@~(@"),
    (')', "ABCDEFG+-[[&@~@)"),
];

static NONEMPTY_STACK_FULL: &[RawRow] = &[
    ('A', "ABCDEFG+-[]&@~()"),
    ('B', "ABCDE-G+-[]&@~()"),
    ('C', "ABCD+FG+-[]&@~()"),
    ('D', "ABC-EFG+-[]&@~()"),
    ('E', "AB+DEFG+-[]&@~()"),
    ('F', "A-CDEFG+-[]&@~()"),
    ('G', "+BCDEFG+-[]&@~()"),
    ('+', "ABCDEFG+A[B&@E+F"),
    ('-', "ABCDEFGB-[C&@FG-"),
    ('[', "+-+-+-C+-[+-+-+-"),
    (']', "ABCD[[[]-[+&@~[]"),
    ('@', "AB]]]]G+-[+&-~+-"),
    ('&', "ABCDEFG+-[[+@~()"),
    ('(', "ABCDEFG+-[[&@~(E"),
    (')', "ABCDEFG+-[[&@~F)"),
];

/// A rectified transition table: every letter entry names a letter that
/// exists in the in-use alphabet.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    rows: HashMap<Symbol, [Symbol; 16]>,
}

impl TransitionTable {
    /// Build a rectified table from authored row data.
    ///
    /// Letter entries with ordinal ≥ `symbol_count` are remapped to the
    /// in-use letter at `ordinal % symbol_count`; operators, the start
    /// marker, and the stop marker pass through unchanged. Pure: the
    /// authored constants are never mutated, so the reduced and full
    /// variants can never alias each other's rectified state.
    fn rectify(raw: &[RawRow], symbol_count: u8) -> TransitionTable {
        let mut rows = HashMap::with_capacity(raw.len());
        for &(state_char, row_str) in raw {
            let state = Symbol::from_char(state_char)
                .expect("authored table state is a known symbol");
            let mut row = [Symbol::Stop; 16];
            debug_assert_eq!(row_str.len(), 16, "authored row must cover all nibbles");
            for (slot, c) in row.iter_mut().zip(row_str.chars()) {
                let sym = Symbol::from_char(c)
                    .expect("authored table entry is a known symbol");
                *slot = match sym {
                    Symbol::Letter(ord) if ord >= symbol_count => {
                        Symbol::Letter(ord % symbol_count)
                    }
                    other => other,
                };
            }
            rows.insert(state, row);
        }
        TransitionTable { rows }
    }

    /// Look up the next symbol for `state` under `nibble`.
    ///
    /// Panics if `state` has no row; the automaton can only reach
    /// states the authored data covers (the start marker only ever
    /// occurs with an empty stack, `[` only with a non-empty one), so a
    /// missing row is a programming error, not an input condition.
    pub fn next(&self, state: Symbol, nibble: u8) -> Symbol {
        self.rows[&state][usize::from(nibble & 0x0F)]
    }

    /// States this table defines a row for.
    pub fn states(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.rows.keys().copied()
    }

    #[cfg(test)]
    fn entries(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.rows.values().flatten().copied()
    }
}

/// Rectify both tables of `variant` for an alphabet of `symbol_count`
/// letters, returning `(empty_stack, nonempty_stack)`.
pub fn rectified_pair(variant: TableVariant, symbol_count: u8) -> (TransitionTable, TransitionTable) {
    let (empty, nonempty) = match variant {
        TableVariant::Reduced => (EMPTY_STACK_REDUCED, NONEMPTY_STACK_REDUCED),
        TableVariant::Full => (EMPTY_STACK_FULL, NONEMPTY_STACK_FULL),
    };
    (
        TransitionTable::rectify(empty, symbol_count),
        TransitionTable::rectify(nonempty, symbol_count),
    )
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_authored_rows_cover_every_nibble() {
        for raw in [
            EMPTY_STACK_REDUCED,
            NONEMPTY_STACK_REDUCED,
            EMPTY_STACK_FULL,
            NONEMPTY_STACK_FULL,
        ] {
            for &(state, row) in raw {
                assert_eq!(row.len(), 16, "row for '{state}' must have 16 entries");
                assert!(row.chars().all(|c| Symbol::from_char(c).is_some()));
            }
        }
    }

    #[test]
    fn rectification_keeps_letters_in_alphabet() {
        for variant in [TableVariant::Reduced, TableVariant::Full] {
            for count in 2..=7u8 {
                let (empty, nonempty) = rectified_pair(variant, count);
                for table in [&empty, &nonempty] {
                    for sym in table.entries() {
                        if let Symbol::Letter(ord) = sym {
                            assert!(
                                ord < count,
                                "letter ordinal {ord} escaped alphabet of {count}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn rectification_remaps_by_modulo() {
        // With 2 letters: G (ordinal 6) folds to A (6 % 2), C (2) to A,
        // D (3) to B.
        let (empty, _) = rectified_pair(TableVariant::Reduced, 2);
        // Start row is "ABCDEFGAB[[[[DFG" → nibble 2 authored C.
        assert_eq!(empty.next(Symbol::Start, 2), Symbol::Letter(0));
        // nibble 3 authored D → B.
        assert_eq!(empty.next(Symbol::Start, 3), Symbol::Letter(1));
        // nibble 6 authored G → A.
        assert_eq!(empty.next(Symbol::Start, 6), Symbol::Letter(0));
        // In-range letters untouched.
        assert_eq!(empty.next(Symbol::Start, 1), Symbol::Letter(1));
    }

    #[test]
    fn rectification_passes_operators_through() {
        let (empty, nonempty) = rectified_pair(TableVariant::Reduced, 2);
        // "ABCDEFG[[[[[@~+[" for state A: nibble 7 is a push.
        assert_eq!(empty.next(Symbol::Letter(0), 7), Symbol::Push);
        assert_eq!(empty.next(Symbol::Letter(0), 12), Symbol::Mark);
        assert_eq!(empty.next(Symbol::Letter(0), 13), Symbol::Stop);
        // "+-+-+-C+-[+-+-+-" for state [: nibble 0 is a turn.
        assert_eq!(nonempty.next(Symbol::Push, 0), Symbol::TurnLeft);
    }

    #[test]
    fn variants_cover_their_operator_sets() {
        let (empty_r, _) = rectified_pair(TableVariant::Reduced, 7);
        let (empty_f, nonempty_f) = rectified_pair(TableVariant::Full, 7);

        // Reduced tables never emit swap/angle operators.
        assert!(!empty_r.entries().any(|s| matches!(
            s,
            Symbol::SwapSign | Symbol::AngleDec | Symbol::AngleInc
        )));

        // Full tables define rows for the extra operators.
        assert!(empty_f.states().any(|s| s == Symbol::SwapSign));
        assert!(nonempty_f.states().any(|s| s == Symbol::AngleDec));
        assert!(nonempty_f.states().any(|s| s == Symbol::AngleInc));
    }

    #[test]
    fn start_state_only_in_empty_stack_table() {
        for variant in [TableVariant::Reduced, TableVariant::Full] {
            let (empty, nonempty) = rectified_pair(variant, 7);
            assert!(empty.states().any(|s| s == Symbol::Start));
            assert!(!nonempty.states().any(|s| s == Symbol::Start));
            // Push is only reachable with a non-empty stack.
            assert!(nonempty.states().any(|s| s == Symbol::Push));
        }
    }
}
