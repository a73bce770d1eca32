//! Type-safe wrappers for digest values
//!
//! Fixed-size outputs carry their length in the type, so a SHA-1 digest can
//! never be confused with a buffer of some other size.

pub mod digest;

pub use digest::Digest;

/// Trait for types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

