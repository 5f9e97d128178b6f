//! Core Shamir's Secret Sharing implementation
//!
//! Split a secret into N shares where any K can reconstruct it.
//! Each byte of the secret is the constant term of a fresh random
//! polynomial of degree K-1 over GF(256); share i holds the polynomial
//! evaluations at x = i.

use crate::gf256::{lagrange_interpolate, poly_eval};
use crate::ShamirError;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// A single share of a secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    /// Share index (1..=N, never 0)
    pub index: u8,
    /// Share data (same length as original secret)
    pub data: Vec<u8>,
}

/// Split a secret into shares using Shamir's Secret Sharing
///
/// # Arguments
/// * `secret` - The secret bytes to split
/// * `threshold` - Minimum shares needed to reconstruct (K)
/// * `total` - Total shares to generate (N)
///
/// # Returns
/// Vector of N shares, any K of which can reconstruct the secret
pub fn split_secret(secret: &[u8], threshold: u8, total: u8) -> Result<Vec<Share>, ShamirError> {
    split_secret_with(&mut rand::thread_rng(), secret, threshold, total)
}

/// Split a secret with a caller-supplied random source.
///
/// K = 1 is accepted: every share then carries the secret verbatim,
/// which is degenerate but well defined.
pub fn split_secret_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    secret: &[u8],
    threshold: u8,
    total: u8,
) -> Result<Vec<Share>, ShamirError> {
    if threshold < 1 {
        return Err(ShamirError::InvalidParameters(
            "threshold must be at least 1".into(),
        ));
    }
    if threshold > total {
        return Err(ShamirError::InvalidParameters(
            "threshold cannot exceed total shares".into(),
        ));
    }
    if secret.is_empty() {
        return Err(ShamirError::InvalidParameters("empty secret".into()));
    }

    let mut shares: Vec<Share> = (1..=total)
        .map(|i| Share {
            index: i,
            data: Vec::with_capacity(secret.len()),
        })
        .collect();

    // For each byte of the secret, create a random polynomial and evaluate
    // it at each share index. Coefficients are drawn fresh per byte and per
    // call; reusing or deriving them from the secret would break the
    // information-theoretic secrecy guarantee.
    let mut coefficients = vec![0u8; threshold as usize];
    for &secret_byte in secret {
        coefficients[0] = secret_byte;
        rng.fill_bytes(&mut coefficients[1..]);

        for share in &mut shares {
            share.data.push(poly_eval(&coefficients, share.index));
        }
    }
    coefficients.zeroize();

    Ok(shares)
}

/// Reconstruct a secret from shares
///
/// Accepts any set of at least K distinct shares; extra shares beyond the
/// threshold are harmless and every K-subset agrees on the result.
pub fn combine_secret(shares: &[Share]) -> Result<Vec<u8>, ShamirError> {
    if shares.len() < 2 {
        return Err(ShamirError::MalformedShares(
            "need at least 2 shares to reconstruct".into(),
        ));
    }

    // All shares must have the same length
    let secret_len = shares[0].data.len();
    if shares.iter().any(|s| s.data.len() != secret_len) {
        return Err(ShamirError::MalformedShares(
            "shares have different lengths".into(),
        ));
    }

    // x = 0 is the secret itself; a share claiming index 0 is never valid
    if shares.iter().any(|s| s.index == 0) {
        return Err(ShamirError::MalformedShares("share index 0".into()));
    }

    // Check for duplicate indices
    let mut indices: Vec<u8> = shares.iter().map(|s| s.index).collect();
    indices.sort_unstable();
    indices.dedup();
    if indices.len() != shares.len() {
        return Err(ShamirError::MalformedShares(
            "duplicate share indices".into(),
        ));
    }

    // Reconstruct each byte using Lagrange interpolation
    let mut secret = Vec::with_capacity(secret_len);
    for byte_idx in 0..secret_len {
        let points: Vec<(u8, u8)> = shares.iter().map(|s| (s.index, s.data[byte_idx])).collect();
        secret.push(lagrange_interpolate(&points));
    }

    Ok(secret)
}
