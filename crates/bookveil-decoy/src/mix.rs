//! Row mixing
//!
//! Hides one real row of values inside a fixed-size table of decoy
//! rows. The real row's position is uniformly random and every decoy
//! row copies the real row's shape and element count, so nothing but
//! the remembered index distinguishes them.

use crate::decoy::generate_decoys_with;
use crate::DecoyError;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Default table height; one row in a hundred is real
pub const DEFAULT_TOTAL_ROWS: usize = 100;

/// A table of rows with exactly one real row at `real_row_index`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowMatrix {
    pub rows: Vec<Vec<String>>,
    pub real_row_index: usize,
}

/// Mix a real row into a table of `total_rows` rows
pub fn mix_rows(real_row: &[String], total_rows: usize) -> Result<RowMatrix, DecoyError> {
    mix_rows_with(&mut rand::thread_rng(), real_row, total_rows)
}

/// Mix with a caller-supplied random source
pub fn mix_rows_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    real_row: &[String],
    total_rows: usize,
) -> Result<RowMatrix, DecoyError> {
    if total_rows < 1 {
        return Err(DecoyError::InvalidParameters(
            "total_rows must be at least 1".into(),
        ));
    }

    let real_row_index = rng.gen_range(0..total_rows);

    // The first real value fixes the shape every decoy row imitates
    let sample = real_row.first().map(String::as_str);

    let mut rows = Vec::with_capacity(total_rows);
    for i in 0..total_rows {
        if i == real_row_index {
            rows.push(real_row.to_vec());
        } else {
            rows.push(generate_decoys_with(rng, real_row.len(), sample));
        }
    }

    Ok(RowMatrix {
        rows,
        real_row_index,
    })
}

/// Fisher-Yates shuffle of arbitrary values, for callers that present
/// rows in a scrambled order
pub fn shuffle<T, R: RngCore + CryptoRng>(rng: &mut R, values: &mut [T]) {
    values.shuffle(rng);
}
