//! Mnemonic and wordlist-index helpers
//!
//! The book cipher addresses the 2048-entry BIP-39 English wordlist, so
//! everything here works in terms of wordlist indices (0..=2047).
//! Arbitrary text is carried as UTF-8 byte values (0..=255), which fit
//! in the same index domain.

use crate::book_cipher::{decode_token, encode_index_with};
use crate::DecoyError;
use bip39::{Language, Mnemonic};
use rand::{CryptoRng, RngCore};

/// Generate a fresh, checksum-valid 12-word English mnemonic
pub fn generate_mnemonic() -> String {
    generate_mnemonic_with(&mut rand::thread_rng())
}

/// Generate a mnemonic from a caller-supplied random source
pub fn generate_mnemonic_with<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    // 128 bits of entropy = 12 words
    let mut entropy = [0u8; 16];
    rng.fill_bytes(&mut entropy);
    // 16 bytes is always a valid entropy length
    match Mnemonic::from_entropy_in(Language::English, &entropy) {
        Ok(m) => m.to_string(),
        Err(_) => unreachable!("16-byte entropy is always valid"),
    }
}

/// Validate a BIP-39 mnemonic (word count, wordlist membership, checksum)
pub fn validate_mnemonic(phrase: &str) -> Result<(), DecoyError> {
    Mnemonic::parse_in(Language::English, phrase)
        .map(|_| ())
        .map_err(|e| DecoyError::InvalidMnemonic(e.to_string()))
}

/// Convert a mnemonic phrase to its wordlist indices (0..=2047)
pub fn mnemonic_to_indices(phrase: &str) -> Result<Vec<u16>, DecoyError> {
    let wordlist = Language::English.word_list();
    phrase
        .split_whitespace()
        .map(|word| {
            wordlist
                .iter()
                .position(|&w| w == word)
                .map(|i| i as u16)
                .ok_or_else(|| DecoyError::InvalidMnemonic(format!("unknown word: {}", word)))
        })
        .collect()
}

/// Convert wordlist indices back to a space-joined phrase
pub fn indices_to_mnemonic(indices: &[u16]) -> Result<String, DecoyError> {
    let wordlist = Language::English.word_list();
    let words = indices
        .iter()
        .map(|&i| {
            wordlist
                .get(i as usize)
                .copied()
                .ok_or_else(|| DecoyError::InvalidRange(format!("word index {} out of range", i)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(words.join(" "))
}

/// Convert arbitrary text to indices via its UTF-8 bytes (each 0..=255)
pub fn text_to_indices(text: &str) -> Vec<u16> {
    text.bytes().map(u16::from).collect()
}

/// Convert byte-valued indices back to text. Returns `None` when any
/// index exceeds 255 (then it is wordlist data, not text) or the bytes
/// are not valid UTF-8.
pub fn indices_to_text(indices: &[u16]) -> Option<String> {
    if indices.iter().any(|&i| i > 255) {
        return None;
    }
    let bytes: Vec<u8> = indices.iter().map(|&i| i as u8).collect();
    String::from_utf8(bytes).ok()
}

/// Encode a list of indices as book-cipher tokens, one per index
pub fn encode_indices<R: RngCore + CryptoRng>(
    rng: &mut R,
    indices: &[u16],
) -> Result<Vec<String>, DecoyError> {
    indices
        .iter()
        .map(|&i| encode_index_with(rng, u32::from(i)))
        .collect()
}

/// Decode book-cipher tokens back to indices
pub fn decode_tokens(tokens: &[String]) -> Result<Vec<u16>, DecoyError> {
    tokens
        .iter()
        .map(|t| {
            let index = decode_token(t)?;
            u16::try_from(index)
                .map_err(|_| DecoyError::InvalidRange(format!("decoded index {} too large", index)))
        })
        .collect()
}
