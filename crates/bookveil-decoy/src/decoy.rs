//! Decoy value generation
//!
//! Produces fake values that are syntactically indistinguishable from a
//! real sample but never derived from it. Book-cipher and chapter
//! shaped decoys stay inside the ranges their decoders accept, so a
//! decoy row survives the same validation the real row would.

use crate::book_cipher::{encode_index_with, MAX_INDEX};
use crate::mnemonic::generate_mnemonic_with;
use crate::shape::SampleShape;
use rand::{CryptoRng, Rng, RngCore};

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Generate `count` decoys shaped like `sample` (book-cipher shaped
/// when no sample is given)
pub fn generate_decoys(count: usize, sample: Option<&str>) -> Vec<String> {
    generate_decoys_with(&mut rand::thread_rng(), count, sample)
}

/// Generate decoys with a caller-supplied random source
pub fn generate_decoys_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    count: usize,
    sample: Option<&str>,
) -> Vec<String> {
    let shape = sample
        .map(SampleShape::classify)
        .unwrap_or(SampleShape::BookCipher);

    (0..count)
        .map(|_| generate_one(rng, &shape, sample))
        .collect()
}

fn generate_one<R: RngCore + CryptoRng>(
    rng: &mut R,
    shape: &SampleShape,
    sample: Option<&str>,
) -> String {
    // Collision with the real value is already astronomically unlikely
    // for every shape; the bounded retry keeps it out of reach entirely.
    for _ in 0..8 {
        let candidate = generate_shaped(rng, shape);
        if Some(candidate.as_str()) != sample {
            return candidate;
        }
    }
    generate_shaped(rng, shape)
}

fn generate_shaped<R: RngCore + CryptoRng>(rng: &mut R, shape: &SampleShape) -> String {
    match shape {
        // A fresh valid mnemonic, unrelated to any real secret
        SampleShape::Mnemonic => generate_mnemonic_with(rng),

        // "<offset>-8-<hex>": only the sampled fragment's length is
        // mimicked, its value is freshly random
        SampleShape::UrlHash { hash_len } => {
            let offset: u32 = rng.gen_range(0..500_000);
            let fragment: String = (0..*hash_len)
                .map(|_| HEX_CHARS[rng.gen_range(0..16)] as char)
                .collect();
            format!("{}-8-{}", offset, fragment)
        }

        // A decodable coordinate for a uniformly random wordlist index
        SampleShape::BookCipher => {
            let index = rng.gen_range(0..=MAX_INDEX);
            // Index is in domain, so encoding cannot fail
            encode_index_with(rng, index).unwrap_or_default()
        }

        SampleShape::ChapterLineChar => format!(
            "{}-{}-{}",
            rng.gen_range(1..=100u32),
            rng.gen_range(1..=500u32),
            rng.gen_range(1..=80u32)
        ),

        SampleShape::LineChar => format!(
            "{}-{}",
            rng.gen_range(1..=5000u32),
            rng.gen_range(1..=80u32)
        ),

        SampleShape::Generic { parts } => (0..*parts)
            .map(|_| rng.gen_range(0..10_000u32).to_string())
            .collect::<Vec<_>>()
            .join("-"),
    }
}
