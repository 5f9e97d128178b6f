//! Book cipher codec
//!
//! Maps a wordlist index (0..=2047) to a human-writable
//! `"page-line-col"` coordinate and back:
//!
//! - page = (index % 400) + 1, range 1-400
//! - line = (index / 400) + 1, range 1-6 for the 2048 domain
//! - col  = random 1-20, decorative only, ignored on decode
//!
//! The decoder accepts lines up to 2000 so that coordinates authored
//! against a real book (rather than emitted by `encode_index`) still
//! decode; our own encoder never emits a line above 6.

use crate::DecoyError;
use rand::{CryptoRng, Rng, RngCore};

/// Pages per "book"; the index wraps around this
const PAGE_SIZE: u32 = 400;
/// Widest line the decoder tolerates
const MAX_DECODE_LINE: u32 = 2000;
/// Indices address a 2048-entry wordlist
pub const MAX_INDEX: u32 = 2047;

/// Encode a wordlist index as a `"page-line-col"` token
pub fn encode_index(index: u32) -> Result<String, DecoyError> {
    encode_index_with(&mut rand::thread_rng(), index)
}

/// Encode with a caller-supplied random source (only the cosmetic
/// column is randomized)
pub fn encode_index_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    index: u32,
) -> Result<String, DecoyError> {
    if index > MAX_INDEX {
        return Err(DecoyError::InvalidRange(format!(
            "index {} out of range (0-{})",
            index, MAX_INDEX
        )));
    }

    let page = (index % PAGE_SIZE) + 1;
    let line = (index / PAGE_SIZE) + 1;
    let col: u32 = rng.gen_range(1..=20);

    Ok(format!("{}-{}-{}", page, line, col))
}

/// Parse one coordinate part. A non-numeric part is a malformed token;
/// a numeral too large for u32 is merely out of range, like any other
/// oversized page or line.
fn parse_coordinate(part: &str, what: &str) -> Result<u32, DecoyError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecoyError::MalformedToken(format!(
            "invalid {}: {:?}",
            what, part
        )));
    }
    part.parse().map_err(|_| {
        DecoyError::InvalidRange(format!("{} {} out of range", what, part))
    })
}

/// Decode a `"page-line[-col]"` token back to its wordlist index.
/// Any third part is ignored.
pub fn decode_token(token: &str) -> Result<u32, DecoyError> {
    let parts: Vec<&str> = token.trim().split('-').collect();
    if parts.len() < 2 {
        return Err(DecoyError::MalformedToken(
            "expected at least page-line".into(),
        ));
    }

    let page = parse_coordinate(parts[0], "page")?;
    let line = parse_coordinate(parts[1], "line")?;

    if page < 1 || page > PAGE_SIZE {
        return Err(DecoyError::InvalidRange(format!(
            "page {} out of range (1-{})",
            page, PAGE_SIZE
        )));
    }
    if line < 1 || line > MAX_DECODE_LINE {
        return Err(DecoyError::InvalidRange(format!(
            "line {} out of range (1-{})",
            line, MAX_DECODE_LINE
        )));
    }

    Ok((line - 1) * PAGE_SIZE + (page - 1))
}
