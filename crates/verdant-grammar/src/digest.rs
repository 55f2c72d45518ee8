//! Digest producer and bit-field decoder.
//!
//! A SHA-256 digest is the sole source of randomness for a plant. The
//! header byte carries two packed fields, the remaining 31 bytes are
//! expanded into 4-bit nibbles:
//!
//! ```text
//! byte 0      [ symbol_count : 3 bits | color_index : 5 bits ]
//! bytes 1-29  rule nibbles (58) — consumed by the rule compiler
//! bytes 30-31 seed nibbles (4)  — consumed by the seed extractor
//! ```
//!
//! Decoding is total: every 32-byte pattern yields valid fields.

use sha2::{Digest as _, Sha256};

use crate::symbol::MAX_LETTERS;

/// Digest size in bytes. Enforced by the `[u8; DIGEST_LEN]` type, so
/// the decoder has no length precondition to check at runtime.
pub const DIGEST_LEN: usize = 32;

/// Number of rule nibbles carried by one digest (bytes 1..=29).
pub const RULE_NIBBLES: usize = 58;

/// Number of seed nibbles carried by one digest (bytes 30..=31).
pub const SEED_NIBBLES: usize = 4;

/// Hash arbitrary input text into the fixed 32-byte digest.
pub fn digest_input(input: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hasher.finalize().into()
}

/// Expand bytes into 4-bit nibbles, high nibble first.
pub fn bytes_to_nibbles(bytes: &[u8]) -> Vec<u8> {
    let mut nibbles = Vec::with_capacity(bytes.len() * 2);
    for b in bytes {
        nibbles.push(b >> 4);
        nibbles.push(b & 0x0F);
    }
    nibbles
}

/// The decoded bit-fields of one digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestFields {
    /// In-use alphabet size, always in `2..=7`.
    pub symbol_count: u8,
    /// Flower palette index, always in `0..=31`.
    pub color_index: u8,
    /// 58 nibbles driving rule compilation.
    pub rule_nibbles: Vec<u8>,
    /// 4 nibbles driving seed extraction.
    pub seed_nibbles: Vec<u8>,
}

/// Decode the header byte and nibble regions of a digest.
///
/// The raw 3-bit symbol count folds non-uniformly: raw values 0 and 1
/// map to 2 and 3, so sizes 2 and 3 are twice as likely as 4..7. This
/// is the original generator's behavior and is load-bearing for
/// reproducibility — do not replace it with rejection or a uniform
/// remap.
pub fn decode_digest(digest: &[u8; DIGEST_LEN]) -> DigestFields {
    let header = digest[0];

    let mut symbol_count = (header >> 5) & 0x07;
    if symbol_count < 2 {
        symbol_count += 2;
    }
    debug_assert!((2..=MAX_LETTERS).contains(&symbol_count));

    let color_index = header & 0x1F;

    DigestFields {
        symbol_count,
        color_index,
        rule_nibbles: bytes_to_nibbles(&digest[1..30]),
        seed_nibbles: bytes_to_nibbles(&digest[30..]),
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
