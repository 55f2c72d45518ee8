//! `verdant-grammar` — deterministic hash-to-plant-grammar compiler.
//!
//! An arbitrary text input is hashed to a 32-byte digest; a bounded
//! pushdown automaton consumes the digest's nibbles and emits one
//! balanced, bounded-length rewrite rule per alphabet letter. The
//! result is an L-system a renderer can interpret as turtle movements.
//!
//! ## Crate structure
//!
//! | Module       | Responsibility                                         |
//! |--------------|--------------------------------------------------------|
//! | [`symbol`]   | Tagged [`Symbol`] alphabet + text conversions          |
//! | [`digest`]   | SHA-256 digest, nibble expansion, header bit-fields    |
//! | [`table`]    | Hand-authored transition tables + rectification        |
//! | [`compiler`] | Pushdown automaton rule compiler + seed extractor      |
//! | [`simplify`] | Idempotent removal of semantically-inert substructure  |
//! | [`lsystem`]  | [`Grammar`] rewriter + [`Plant`] generation state      |
//! | [`palette`]  | 32-color flower palette, stem/background colors        |
//!
//! ## Quick start
//!
//! ```rust
//! use verdant_grammar::{compile_input, CompileOptions};
//!
//! let mut plant = compile_input("what do you dream about?", CompileOptions::default());
//! println!("seed={} color={}", plant.state_string(), plant.color());
//!
//! plant.advance_to(3);
//! println!("generation 3: {}", plant.state_string());
//! ```
//!
//! The whole pipeline is pure and synchronous: the same input always
//! produces a bit-identical digest, grammar, seed, and color.

pub mod compiler;
pub mod digest;
pub mod lsystem;
pub mod palette;
pub mod simplify;
pub mod symbol;
pub mod table;

// ── Symbols ───────────────────────────────────────────────────────────────────
pub use symbol::{parse_symbols, symbols_to_string, Symbol, MAX_LETTERS};

// ── Digest ────────────────────────────────────────────────────────────────────
pub use digest::{
    bytes_to_nibbles, decode_digest, digest_input, DigestFields, DIGEST_LEN, RULE_NIBBLES,
    SEED_NIBBLES,
};

// ── Tables ────────────────────────────────────────────────────────────────────
pub use table::{rectified_pair, TableVariant, TransitionTable};

// ── Compiler ──────────────────────────────────────────────────────────────────
pub use compiler::{compile, compile_input, CompileOptions, RULE_SIZE_MAX};

// ── Simplifier ────────────────────────────────────────────────────────────────
pub use simplify::simplify;

// ── Rewriter ──────────────────────────────────────────────────────────────────
pub use lsystem::{Grammar, Plant};

// ── Palette ───────────────────────────────────────────────────────────────────
pub use palette::{BG_COLOR, PALETTE, STEM_COLOR};
