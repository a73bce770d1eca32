//! Type-safe digest implementation with size guarantees
//!
//! Provides the `Digest` type, representing the output of a
//! hash function with compile-time size guarantees.

use core::fmt;
use core::ops::Deref;
use zeroize::Zeroize;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{string::String, vec::Vec};

use crate::error::{validate, Error, Result};
use crate::types::ConstantTimeEq;

/// A hash digest with a fixed size
#[derive(Clone, PartialEq, Eq, Hash, Zeroize)]
pub struct Digest<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Digest<N> {
    /// Create a new digest from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, which must be exactly `N` bytes long
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Digest::from_slice", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Parse a hexadecimal string of exactly `2 * N` digits (either case)
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        validate::length("Digest::from_hex", hex_str.len(), N * 2)?;

        let mut data = [0u8; N];
        hex::decode_to_slice(hex_str, &mut data)
            .map_err(|_| Error::param("hex_str", "Invalid hexadecimal string"))?;
        Ok(Self { data })
    }

    /// Convert to a lowercase hexadecimal string
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }

    /// Borrow the digest bytes
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.data
    }

    /// Consume the digest and return the raw array
    pub fn into_bytes(self) -> [u8; N] {
        self.data
    }

    /// Get the length of the digest
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the digest is empty
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> From<[u8; N]> for Digest<N> {
    fn from(data: [u8; N]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> From<Digest<N>> for [u8; N] {
    fn from(digest: Digest<N>) -> Self {
        digest.data
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Digest<N> {
    fn eq(&self, other: &[u8; N]) -> bool {
        &self.data == other
    }
}

impl<const N: usize> fmt::LowerHex for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.data {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>({:x})", N, self)
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl<const N: usize> ConstantTimeEq for Digest<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        chdigest_internal::constant_time::ct_eq(self.data, other.data)
    }
}

impl<const N: usize> chdigest_api::Serialize for Digest<N> {
    fn from_bytes(bytes: &[u8]) -> chdigest_api::Result<Self> {
        Self::from_slice(bytes).map_err(Into::into)
    }

    #[cfg(feature = "alloc")]
    fn to_bytes(&self) -> Vec<u8> {
        self.data.to_vec()
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Digest<N> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Digest<N> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex_str = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}
