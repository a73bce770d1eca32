//! Endianness utility functions

use byteorder::{BigEndian, ByteOrder};

/// Encode a u64 as 8 big-endian bytes
pub fn u64_to_be_bytes(value: u64) -> [u8; 8] {
    let mut out = [0u8; 8];
    BigEndian::write_u64(&mut out, value);
    out
}

/// Serialize a run of words as consecutive big-endian u32 values.
///
/// `dst` must be exactly `4 * words.len()` bytes long.
pub fn write_u32_words_be(words: &[u32], dst: &mut [u8]) {
    BigEndian::write_u32_into(words, dst);
}
