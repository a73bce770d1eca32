//! SHA-1 hash function
//!
//! This module implements SHA-1 as specified in FIPS 180-1 as a streaming
//! digest whose running state stays observable between calls. Challenge
//! response protocols that interleave their own bytes with the message rely
//! on that, so bytes are absorbed one at a time straight into the message
//! schedule instead of being staged in a separate block buffer.
//!
//! Note: SHA-1 is considered cryptographically broken and should only be used
//! for compatibility with existing systems.

use core::fmt;

use chdigest_api::HashAlgorithm;
use chdigest_internal::endian;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::Digest;

/// SHA-1 block size in bytes
pub const SHA1_BLOCK_SIZE: usize = 64;
/// SHA-1 digest size in bytes
pub const SHA1_OUTPUT_SIZE: usize = 20;

const SCHEDULE_WORDS: usize = 80;

/// Fill level at which only the 8-byte length field is missing from a block
const LENGTH_OFFSET: usize = SHA1_BLOCK_SIZE - 8;

/// Initial hash values for SHA-1
const H0: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants, one per 20-round pass
const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

/// SHA-1 algorithm marker type
pub enum Sha1Algorithm {}

impl HashAlgorithm for Sha1Algorithm {
    const OUTPUT_SIZE: usize = SHA1_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA1_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-1";
}

/// Output of [`Sha1Digest::digest`]
pub type Sha1Output = Digest<SHA1_OUTPUT_SIZE>;

/// Incremental SHA-1 state.
///
/// Feed data with [`update`](Self::update) any number of times, then call
/// [`digest`](Self::digest). Finalizing resets the instance, so it can be
/// reused for the next message straight away.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct Sha1Digest {
    /// Running hash words H0..H4
    h: [u32; 5],
    /// Message schedule; the first 16 words collect the current block
    w: [u32; SCHEDULE_WORDS],
    /// Bytes of the current block absorbed so far (0..64)
    len_w: usize,
    /// Total message length in bits
    bit_count: u64,
}

impl Sha1Digest {
    /// Creates a new SHA-1 hasher
    pub fn new() -> Self {
        Self {
            h: H0,
            w: [0u32; SCHEDULE_WORDS],
            len_w: 0,
            bit_count: 0,
        }
    }

    /// Hash `data` in one call
    pub fn hash(data: &[u8]) -> Sha1Output {
        let mut hasher = Self::new();
        hasher.update_slice(data);
        hasher.digest()
    }

    /// Discards any in-progress message and restores the initial state
    pub fn reset(&mut self) {
        self.bit_count = 0;
        self.len_w = 0;
        self.h = H0;
        self.w = [0u32; SCHEDULE_WORDS];
    }

    /// Absorbs `data[offset..offset + length]`.
    ///
    /// # Panics
    ///
    /// Panics if the range does not lie inside `data`. Use
    /// [`try_update`](Self::try_update) when the bounds come from untrusted
    /// input.
    pub fn update(&mut self, data: &[u8], offset: usize, length: usize) {
        self.absorb(&data[offset..][..length]);
    }

    /// Absorbs all of `data`
    pub fn update_slice(&mut self, data: &[u8]) {
        self.absorb(data);
    }

    /// Checked variant of [`update`](Self::update).
    ///
    /// Nothing is absorbed when the range is rejected.
    pub fn try_update(&mut self, data: &[u8], offset: usize, length: usize) -> Result<()> {
        validate::range("Sha1Digest::try_update", data.len(), offset, length)?;
        self.update(data, offset, length);
        Ok(())
    }

    /// Completes the hash, returns the digest and resets the state
    pub fn digest(&mut self) -> Sha1Output {
        // The length field records the message only, not the padding
        let length = endian::u64_to_be_bytes(self.bit_count);
        log::trace!("finalizing SHA-1 digest over {} bits", self.bit_count);

        self.absorb(&[0x80]);
        while self.len_w != LENGTH_OFFSET {
            self.absorb(&[0x00]);
        }
        self.absorb(&length);
        debug_assert_eq!(self.len_w, 0);

        let mut out = [0u8; SHA1_OUTPUT_SIZE];
        endian::write_u32_words_be(&self.h, &mut out);

        self.reset();
        Digest::new(out)
    }

    /// Forces the bit count to a particular value.
    ///
    /// The block hash and fill level are left alone, so the count is only
    /// meaningful if the caller tracks the real message length out of band,
    /// for example when splicing externally produced bytes into a running
    /// hash. Ordinary callers should never need this.
    pub fn set_bit_count(&mut self, bits: u64) {
        log::warn!(
            "SHA-1 bit count overridden: {} -> {}",
            self.bit_count,
            bits
        );
        self.bit_count = bits;
    }

    /// Total number of bits absorbed since the last reset
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Number of bytes waiting in the current, partially filled block
    pub fn pending_len(&self) -> usize {
        self.len_w
    }

    fn absorb(&mut self, data: &[u8]) {
        for &byte in data {
            let word = &mut self.w[self.len_w / 4];
            *word = (*word << 8) | u32::from(byte);

            self.len_w += 1;
            if self.len_w == SHA1_BLOCK_SIZE {
                self.process_block();
                self.len_w = 0;
            }
            self.bit_count = self.bit_count.wrapping_add(8);
        }
    }

    /// Compress the block held in `w[..16]` into `h`
    fn process_block(&mut self) {
        let w = &mut self.w;
        for t in 16..SCHEDULE_WORDS {
            w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.h;

        for (t, &word) in w.iter().enumerate() {
            let (f, k) = match t {
                0..=19 => (((c ^ d) & b) ^ d, K[0]),
                20..=39 => (b ^ c ^ d, K[1]),
                40..=59 => ((b & c) | (d & (b | c)), K[2]),
                _ => (b ^ c ^ d, K[3]),
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(word)
                .wrapping_add(k);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        for (h, v) in self.h.iter_mut().zip([a, b, c, d, e]) {
            *h = h.wrapping_add(v);
        }

        w.fill(0);
    }
}

impl Default for Sha1Digest {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha1Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha1Digest")
            .field("bit_count", &self.bit_count)
            .field("pending_len", &self.len_w)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Sha1Digest {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
