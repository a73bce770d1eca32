//! Compile-time description of a hash algorithm

/// Static parameters of a hash algorithm.
///
/// Implemented by uninhabited marker types so that sizes can be used in
/// const contexts without constructing a hasher.
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Compression block size in bytes
    const BLOCK_SIZE: usize;

    /// Human readable algorithm identifier
    const ALGORITHM_ID: &'static str;

    /// Digest size in bits
    fn output_bits() -> usize {
        Self::OUTPUT_SIZE * 8
    }
}
