//! Checksum-wrapped text splitting
//!
//! Splits a UTF-8 secret with a SHA-256 checksum prepended to the
//! payload (`"<64 hex chars>|<secret>"`), so that combining with wrong
//! or corrupted shares fails loudly instead of returning garbage.
//! Shares are produced directly in their textual `"<index>-<hex>"` form.

use crate::encoding::{parse_share, serialize_share};
use crate::shamir::{combine_secret, split_secret_with};
use crate::ShamirError;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};

/// Hex length of the SHA-256 checksum prefix
const CHECKSUM_LEN: usize = 64;

fn checksum_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Split a text secret into `total` textual shares, `threshold` of which
/// reconstruct it. The checksum travels inside the shared payload.
pub fn split_text(secret: &str, threshold: u8, total: u8) -> Result<Vec<String>, ShamirError> {
    split_text_with(&mut rand::thread_rng(), secret, threshold, total)
}

/// Split a text secret with a caller-supplied random source
pub fn split_text_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    secret: &str,
    threshold: u8,
    total: u8,
) -> Result<Vec<String>, ShamirError> {
    let payload = format!("{}|{}", checksum_hex(secret.as_bytes()), secret);
    let shares = split_secret_with(rng, payload.as_bytes(), threshold, total)?;
    Ok(shares.iter().map(serialize_share).collect())
}

/// Combine textual shares and verify the embedded checksum
pub fn combine_text(shares: &[String]) -> Result<String, ShamirError> {
    let parsed = shares
        .iter()
        .map(|s| parse_share(s))
        .collect::<Result<Vec<_>, _>>()?;

    let payload_bytes = combine_secret(&parsed)?;
    let payload = String::from_utf8(payload_bytes).map_err(|_| {
        ShamirError::ChecksumMismatch("reconstructed payload is not valid UTF-8".into())
    })?;

    // Payload format: CHECKSUM(64 hex chars) '|' SECRET
    match payload.char_indices().find(|&(_, c)| c == '|') {
        Some((idx, _)) if idx == CHECKSUM_LEN => {}
        _ => {
            return Err(ShamirError::ChecksumMismatch(
                "reconstructed payload has no checksum prefix".into(),
            ))
        }
    }

    let (expected, rest) = payload.split_at(CHECKSUM_LEN);
    let secret = &rest[1..];

    if checksum_hex(secret.as_bytes()) != expected {
        return Err(ShamirError::ChecksumMismatch(
            "checksum disagrees; shares are corrupted or from different sets".into(),
        ));
    }

    Ok(secret.to_string())
}
