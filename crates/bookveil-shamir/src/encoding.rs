//! Textual share encoding
//!
//! A share is written as `"<index>-<hex payload>"`, e.g. `"3-a1ff02"`.
//! This is the form that gets handed to the decoy/row-mixing layer and
//! written down by users, so parsing is strict: a malformed string is
//! rejected rather than repaired.

use crate::shamir::Share;
use crate::ShamirError;

/// Render a share as `"<index>-<hex payload>"`
pub fn serialize_share(share: &Share) -> String {
    format!("{}-{}", share.index, hex::encode(&share.data))
}

/// Parse a share from its `"<index>-<hex payload>"` text form
pub fn parse_share(input: &str) -> Result<Share, ShamirError> {
    let trimmed = input.trim();
    let (index_part, payload_part) = trimmed
        .split_once('-')
        .ok_or_else(|| ShamirError::ParseError("missing '-' separator".into()))?;

    let index: u8 = index_part
        .parse()
        .map_err(|_| ShamirError::ParseError(format!("invalid share index: {:?}", index_part)))?;
    if index == 0 {
        return Err(ShamirError::ParseError("share index must be 1-255".into()));
    }

    if payload_part.is_empty() {
        return Err(ShamirError::ParseError("empty payload".into()));
    }
    let data = hex::decode(payload_part)
        .map_err(|e| ShamirError::ParseError(format!("invalid hex payload: {}", e)))?;

    Ok(Share { index, data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let share = Share {
            index: 3,
            data: vec![0xa1, 0xff, 0x02],
        };
        assert_eq!(serialize_share(&share), "3-a1ff02");
    }

    #[test]
    fn test_roundtrip() {
        let share = Share {
            index: 255,
            data: vec![0x00, 0x10, 0xde, 0xad],
        };
        let parsed = parse_share(&serialize_share(&share)).unwrap();
        assert_eq!(parsed, share);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",            // empty
            "3",           // no separator
            "-a1ff",       // missing index
            "0-a1ff",      // index 0
            "256-a1ff",    // index out of u8 range
            "x-a1ff",      // non-numeric index
            "3-",          // empty payload
            "3-a1f",       // odd-length hex
            "3-zzzz",      // non-hex payload
        ] {
            assert!(
                matches!(parse_share(bad), Err(ShamirError::ParseError(_))),
                "accepted malformed share {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_accepts_uppercase_hex() {
        let parsed = parse_share("7-DEADBEEF").unwrap();
        assert_eq!(parsed.index, 7);
        assert_eq!(parsed.data, vec![0xde, 0xad, 0xbe, 0xef]);
    }
}
