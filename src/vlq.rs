//! Base64 variable-length quantity codec.
//!
//! Each Base64 character carries six bits: the low five are payload and bit
//! five flags that another character follows. The least significant payload
//! bit of a reassembled value is its sign.

/// Characters of the Base64 alphabet, indexed by their six-bit value.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const SHIFT_SIZE: u32 = 5;
const CONTINUATION_FLAG: u8 = 1 << SHIFT_SIZE;
const PAYLOAD_MASK: u8 = CONTINUATION_FLAG - 1;

/// Highest shift a nonzero group may use: room for the 65 bits of an `i64`
/// magnitude plus its sign.
const MAX_SHIFT: u32 = 65;

const INVALID: u8 = u8::MAX;

const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Errors produced while decoding a single token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VlqError {
    #[error("invalid base64 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("token ended inside a continuation group")]
    TruncatedSequence,

    #[error("value does not fit in a signed 64-bit integer")]
    Overflow,
}

/// Decode every value chained in `token`.
///
/// An empty token decodes to an empty vector.
pub fn decode(token: &str) -> Result<Vec<i64>, VlqError> {
    let mut results = Vec::new();
    let mut shift = 0u32;
    let mut value = 0u128;

    for (position, character) in token.chars().enumerate() {
        let digit = lookup(character).ok_or(VlqError::InvalidCharacter {
            character,
            position,
        })?;

        // Zero groups add nothing, so padding may run past the i64 range.
        let payload = digit & PAYLOAD_MASK;
        if payload != 0 {
            if shift > MAX_SHIFT {
                return Err(VlqError::Overflow);
            }
            value += u128::from(payload) << shift;
        }

        if digit & CONTINUATION_FLAG != 0 {
            shift = shift.saturating_add(SHIFT_SIZE);
            continue;
        }

        results.push(finish(value)?);
        shift = 0;
        value = 0;
    }

    if shift != 0 {
        return Err(VlqError::TruncatedSequence);
    }

    Ok(results)
}

/// Decode a token expected to hold at most one value.
///
/// Returns the first value, or `None` for an empty token.
pub fn decode_single(token: &str) -> Result<Option<i64>, VlqError> {
    Ok(decode(token)?.into_iter().next())
}

/// Encode `values` back to back into a single token.
pub fn encode(values: &[i64]) -> String {
    let mut out = String::new();
    for &value in values {
        let mut v = (u128::from(value.unsigned_abs()) << 1) | u128::from(value < 0);
        loop {
            let mut digit = (v & u128::from(PAYLOAD_MASK)) as u8;
            v >>= SHIFT_SIZE;
            if v != 0 {
                digit |= CONTINUATION_FLAG;
            }
            out.push(ALPHABET[digit as usize] as char);
            if v == 0 {
                break;
            }
        }
    }
    out
}

fn lookup(character: char) -> Option<u8> {
    if !character.is_ascii() {
        return None;
    }
    match DECODE_TABLE[character as usize] {
        INVALID => None,
        digit => Some(digit),
    }
}

fn finish(value: u128) -> Result<i64, VlqError> {
    let magnitude = value >> 1;
    if value & 1 == 1 {
        let magnitude = i128::try_from(magnitude).map_err(|_| VlqError::Overflow)?;
        i64::try_from(-magnitude).map_err(|_| VlqError::Overflow)
    } else {
        i64::try_from(magnitude).map_err(|_| VlqError::Overflow)
    }
}
