//! Bookveil Shamir Module
//!
//! Split and reconstruct secrets using Shamir's Secret Sharing over
//! GF(256), with a textual share format suited to being written down
//! or hidden among decoy rows (see `bookveil-decoy`).
//!
//! # Layers
//!
//! ## Raw (`shamir`, `encoding`)
//! - Byte-level split/combine, any K of N
//! - Shares rendered as `"<index>-<hex>"` strings
//!
//! ## Checked (`checked`)
//! - Text secrets with an embedded SHA-256 checksum
//! - Combining corrupted or mismatched shares fails instead of
//!   returning plausible-looking garbage
//!
//! # Example: split a recovery phrase
//!
//! ```
//! use bookveil_shamir::checked::{combine_text, split_text};
//!
//! let phrase = "network edit tray column panic shadow genius grocery erase glance edit pact";
//!
//! // Split into 2-of-3 textual shares
//! let shares = split_text(phrase, 2, 3).unwrap();
//! assert_eq!(shares.len(), 3);
//!
//! // Recover with any 2 shares
//! let recovered = combine_text(&shares[1..3]).unwrap();
//! assert_eq!(recovered, phrase);
//! ```

pub mod checked;
pub mod encoding;
pub mod gf256;
pub mod shamir;

// Re-exports
pub use checked::{combine_text, split_text};
pub use encoding::{parse_share, serialize_share};
pub use shamir::{combine_secret, split_secret, split_secret_with, Share};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShamirError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("Malformed shares: {0}")]
    MalformedShares(String),
    #[error("Invalid share format: {0}")]
    ParseError(String),
    #[error("Integrity check failed: {0}")]
    ChecksumMismatch(String),
}
