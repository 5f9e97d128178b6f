//! Sample shape classification
//!
//! Decoys must be syntactically indistinguishable from the real value
//! they hide. Instead of scattering string checks through the
//! generator, the sample is classified once into a closed set of shape
//! variants; generation then dispatches on the variant.

/// The recognized shapes a real sample value can take.
///
/// Classification order matters: a book-cipher triple is also three
/// numeric parts, so it is checked before the generic chapter shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleShape {
    /// Space-separated words with no hyphen (a mnemonic phrase)
    Mnemonic,
    /// `"<offset>-<page>-<hex fragment>"`; only the fragment's length
    /// is retained, never its value
    UrlHash { hash_len: usize },
    /// `"page-line-col"` with page <= 400 and line <= 6
    BookCipher,
    /// Three numeric parts outside book-cipher ranges (chapter-line-char)
    ChapterLineChar,
    /// Two numeric parts (line-char)
    LineChar,
    /// Any other hyphenated value; decoys mimic the part count
    Generic { parts: usize },
}

fn is_numeric(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

fn is_hex_fragment(part: &str) -> bool {
    part.len() >= 8 && part.bytes().all(|b| b.is_ascii_hexdigit())
}

impl SampleShape {
    /// Classify a sample value. Anything unrecognized falls back to the
    /// book-cipher shape, which is also what a caller with no sample gets.
    pub fn classify(sample: &str) -> SampleShape {
        if sample.contains(' ') && !sample.contains('-') {
            return SampleShape::Mnemonic;
        }

        let parts: Vec<&str> = sample.split('-').collect();

        if parts.len() == 3 && is_hex_fragment(parts[2]) {
            return SampleShape::UrlHash {
                hash_len: parts[2].len(),
            };
        }

        if parts.len() == 3 && parts.iter().all(|p| is_numeric(p)) {
            let page: u32 = parts[0].parse().unwrap_or(u32::MAX);
            let line: u32 = parts[1].parse().unwrap_or(u32::MAX);
            // Values inside book-cipher ranges get decodable decoys
            if line <= 6 && page <= 400 {
                return SampleShape::BookCipher;
            }
            return SampleShape::ChapterLineChar;
        }

        if parts.len() == 2 && parts.iter().all(|p| is_numeric(p)) {
            return SampleShape::LineChar;
        }

        if parts.len() > 1 {
            return SampleShape::Generic { parts: parts.len() };
        }

        SampleShape::BookCipher
    }
}
