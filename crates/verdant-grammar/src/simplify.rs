//! Rule simplifier: removes compiled substructure with no visual effect.
//!
//! Two passes over the symbol sequence:
//!
//! 1. **Dead-bracket elision** — a span `[ ops* ]` whose interior is
//!    only invisible operators (turns, swap, angle adjusters — see
//!    [`Symbol::is_invisible_op`]) pushes state, turns invisibly, and
//!    pops state, so it draws nothing. Every such span (including the
//!    empty `[]`) is removed, repeatedly, until none remain — removing
//!    one span can expose an enclosing one.
//! 2. **Trailing-operator collapse** — a run of invisible operators
//!    immediately before a `]` is discarded, since the pop restores the
//!    saved heading anyway.
//!
//! The passes never remove letters, marks, or brackets that still
//! guard visible content, and the whole transform is idempotent.

use crate::symbol::Symbol;

/// Simplify one compiled rule. Returns a new sequence; the input rule
/// is never mutated.
pub fn simplify(rule: &[Symbol]) -> Vec<Symbol> {
    let mut out = rule.to_vec();
    while strip_one_dead_bracket(&mut out) {}
    collapse_ops_before_pop(&out)
}

/// Remove the first `[ ops* ]` span found, if any. Returns whether a
/// span was removed (the caller loops to a fixed point).
fn strip_one_dead_bracket(rule: &mut Vec<Symbol>) -> bool {
    let mut open = None;
    for (i, &sym) in rule.iter().enumerate() {
        match sym {
            Symbol::Push => open = Some(i),
            Symbol::Pop => {
                if let Some(start) = open {
                    rule.drain(start..=i);
                    return true;
                }
            }
            s if s.is_invisible_op() => {}
            // A letter, mark, or anything visible invalidates the
            // currently-open candidate span.
            _ => open = None,
        }
    }
    false
}

/// Rebuild the rule, dropping invisible-operator runs that directly
/// precede a pop.
fn collapse_ops_before_pop(rule: &[Symbol]) -> Vec<Symbol> {
    let mut out: Vec<Symbol> = Vec::with_capacity(rule.len());
    for &sym in rule {
        if sym == Symbol::Pop {
            while out.last().is_some_and(|s| s.is_invisible_op()) {
                out.pop();
            }
        }
        out.push(sym);
    }
    out
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{parse_symbols, symbols_to_string};

    fn simplified(text: &str) -> String {
        symbols_to_string(&simplify(&parse_symbols(text).unwrap()))
    }

    // The raw → clean pairs below are the actual compiler outputs for
    // SHA-256("") with the reduced tables.
    #[test]
    fn nested_dead_brackets_unwind_to_fixed_point() {
        assert_eq!(simplified("[+@][+[-]]"), "[+@]");
        assert_eq!(simplified("G[-E@-[[]]]"), "G[-E@]");
    }

    #[test]
    fn empty_bracket_is_dead() {
        assert_eq!(simplified("G@B@BE[+]"), "G@B@BE");
        assert_eq!(simplified("A[]B"), "AB");
    }

    #[test]
    fn trailing_ops_before_pop_collapse() {
        assert_eq!(simplified("G[-[+E++]]"), "G[-[+E]]");
        assert_eq!(simplified("[CBA-A]@DD[-C++-&]"), "[CBA-A]@DD[-C]");
    }

    #[test]
    fn marks_guard_their_bracket() {
        // @ draws, so [+@] is not dead and +@] keeps its +.
        assert_eq!(simplified("[+@]"), "[+@]");
        assert_eq!(simplified("[@+]"), "[@]");
    }

    #[test]
    fn full_variant_ops_count_as_invisible() {
        assert_eq!(simplified("A[&()]B"), "AB");
        assert_eq!(simplified("[A&(]"), "[A]");
    }

    #[test]
    fn untouched_when_nothing_is_dead() {
        for text in ["", "ACB", "[+EB+EGE]", "G@B@BE", "[-[[-D+A]]]", "+A-B"] {
            assert_eq!(simplified(text), text);
        }
    }

    #[test]
    fn simplification_is_idempotent() {
        for text in [
            "[+@][+[-]]",
            "G@B@BE[+]",
            "G[-E@-[[]]]",
            "G[-[+E++]]",
            "[-[-E@+E]]",
            "B-C[+CC[+AABAAA]]",
            "A[&()]B[@+]",
        ] {
            let once = simplify(&parse_symbols(text).unwrap());
            let twice = simplify(&once);
            assert_eq!(once, twice, "not idempotent for {text}");
        }
    }

    #[test]
    fn never_removes_letters_or_marks() {
        for text in ["[+@][+[-]]", "G[-E@-[[]]]", "B-C[+CC[+AABAAA]]"] {
            let rule = parse_symbols(text).unwrap();
            let clean = simplify(&rule);
            let visible = |syms: &[Symbol]| {
                syms.iter()
                    .filter(|s| s.is_letter() || **s == Symbol::Mark)
                    .count()
            };
            assert_eq!(visible(&rule), visible(&clean));
            assert!(clean.len() <= rule.len());
        }
    }
}
