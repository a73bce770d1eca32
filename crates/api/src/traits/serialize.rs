//! Traits for byte serialization of digest values.

use crate::Result;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// A trait for public values that can be serialized to and from bytes.
pub trait Serialize: Sized {
    /// Creates an object from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Converts the object to a byte vector.
    #[cfg(feature = "alloc")]
    fn to_bytes(&self) -> Vec<u8>;
}
