//! Format constants and tuning parameters.
//!
//! This module collects the thresholds and reserved names shared by the
//! bencode codec and the JSON bridge.

// ============================================================================
// Integers
// ============================================================================

/// Integer text longer than this many characters is decoded as a
/// [`BigInt`](num_bigint::BigInt) instead of an `i64`.
///
/// The count includes a leading sign. It approximates the JSON safe-integer
/// range and is applied to the text, not the magnitude.
pub const FAST_INTEGER_MAX_DIGITS: usize = 15;

// ============================================================================
// Decoder limits
// ============================================================================

/// Default maximum nesting of lists and dictionaries accepted by the decoder.
///
/// BEP-52 file trees nest one dictionary per directory level, so this is set
/// well above anything a real torrent produces.
pub const DEFAULT_MAX_DEPTH: usize = 256;

// ============================================================================
// JSON bridge
// ============================================================================

/// Key suffix marking a hex-encoded binary string.
pub const HEX_SUFFIX: &str = "@hex";

/// Key suffix marking a decimal-encoded arbitrary-precision integer.
pub const BIGINT_SUFFIX: &str = "@bigint";
