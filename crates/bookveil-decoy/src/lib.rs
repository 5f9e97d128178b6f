//! Bookveil Decoy Module
//!
//! Plausible-deniability primitives: a book-cipher codec for writing
//! wordlist indices as page-line-column coordinates, a decoy generator
//! that fabricates values matching a real sample's shape, and a row
//! mixer that hides the one real row inside a table of decoys.
//!
//! # Example: hide a pair of coordinates
//!
//! ```
//! use bookveil_decoy::mix::{mix_rows, DEFAULT_TOTAL_ROWS};
//!
//! let real = vec!["1-1-5".to_string(), "2-3-9".to_string()];
//! let matrix = mix_rows(&real, DEFAULT_TOTAL_ROWS).unwrap();
//!
//! assert_eq!(matrix.rows.len(), 100);
//! assert_eq!(matrix.rows[matrix.real_row_index], real);
//! ```
//!
//! Without `real_row_index` an observer sees 100 rows of identically
//! formatted coordinates, all of which decode; nothing marks the real one.

pub mod book_cipher;
pub mod decoy;
pub mod mix;
pub mod mnemonic;
pub mod shape;

// Re-exports
pub use book_cipher::{decode_token, encode_index};
pub use decoy::{generate_decoys, generate_decoys_with};
pub use mix::{mix_rows, mix_rows_with, RowMatrix, DEFAULT_TOTAL_ROWS};
pub use shape::SampleShape;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecoyError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("Malformed token: {0}")]
    MalformedToken(String),
    #[error("Value out of range: {0}")]
    InvalidRange(String),
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),
}
