//! Six-bit ASCII payload armoring.
//!
//! Each 6-bit group maps to one printable character: indices 0-39 are
//! `'0'`..`'W'` (ASCII 48 + index), indices 40-63 are `` '`' ``..`'w'`
//! (ASCII 56 + index).

use crate::error::{AisError, Result};

use super::bitfield::BitReader;

/// Armor `bit_len` bits of `bytes` (MSB-first). Lengths that are not a
/// multiple of 6 are padded with zero bits; the navigation block is exactly
/// 168 = 28 x 6 bits so no padding occurs on the encode path.
pub fn encode(bytes: &[u8], bit_len: usize) -> String {
    debug_assert!(bit_len <= bytes.len() * 8);
    let groups = bit_len.div_ceil(6);
    let mut reader = BitReader::new(bytes);
    let mut out = String::with_capacity(groups);
    let mut remaining = bit_len;
    for _ in 0..groups {
        let take = remaining.min(6) as u32;
        let mut index = reader.take_unsigned(take) as u8;
        index <<= 6 - take;
        remaining -= take as usize;
        out.push(armor_char(index));
    }
    out
}

/// Reverse the armoring: each character becomes six bits. Returns the bit
/// buffer and its length in bits (always `6 * armored.len()`).
pub fn decode(armored: &str) -> Result<(Vec<u8>, usize)> {
    let bit_len = armored.len() * 6;
    let mut buf = vec![0u8; bit_len.div_ceil(8)];
    let mut pos = 0usize;
    for c in armored.chars() {
        let index = armor_index(c)?;
        for i in (0..6).rev() {
            if (index >> i) & 1 != 0 {
                buf[pos / 8] |= 0x80 >> (pos % 8);
            }
            pos += 1;
        }
    }
    Ok((buf, bit_len))
}

fn armor_char(index: u8) -> char {
    debug_assert!(index < 64);
    if index < 40 {
        char::from(b'0' + index)
    } else {
        char::from(b'`' + (index - 40))
    }
}

fn armor_index(c: char) -> Result<u8> {
    match c {
        '0'..='W' => Ok(c as u8 - b'0'),
        '`'..='w' => Ok(c as u8 - b'`' + 40),
        _ => Err(AisError::InvalidArmorCharacter(c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_endpoints() {
        assert_eq!(armor_char(0), '0');
        assert_eq!(armor_char(9), '9');
        assert_eq!(armor_char(10), ':');
        assert_eq!(armor_char(17), 'A');
        assert_eq!(armor_char(39), 'W');
        assert_eq!(armor_char(40), '`');
        assert_eq!(armor_char(41), 'a');
        assert_eq!(armor_char(63), 'w');
    }

    #[test]
    fn test_index_is_inverse_of_char() {
        for index in 0..64u8 {
            assert_eq!(armor_index(armor_char(index)).unwrap(), index);
        }
    }

    #[test]
    fn test_rejects_unused_ascii() {
        for c in ['X', 'Y', 'Z', '[', '_', 'x', '!', '*', ' '] {
            assert!(armor_index(c).is_err());
        }
    }

    #[test]
    fn test_decode_encode_identity() {
        // all 6-bit groups, twice over, in one buffer
        let mut bytes = Vec::new();
        let mut pos = 0usize;
        let mut push_group = |bytes: &mut Vec<u8>, g: u8| {
            for i in (0..6).rev() {
                if pos % 8 == 0 {
                    bytes.push(0);
                }
                if (g >> i) & 1 != 0 {
                    let len = bytes.len();
                    bytes[len - 1] |= 0x80 >> (pos % 8);
                }
                pos += 1;
            }
        };
        for g in 0..64u8 {
            push_group(&mut bytes, g);
            push_group(&mut bytes, 63 - g);
        }
        let bit_len = 64 * 2 * 6;
        let armored = encode(&bytes, bit_len);
        assert_eq!(armored.len(), 128);
        let (back, back_len) = decode(&armored).unwrap();
        assert_eq!(back_len, bit_len);
        assert_eq!(back, bytes);
    }
}
