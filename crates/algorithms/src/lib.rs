//! Streaming SHA-1 digest primitives
//!
//! This crate provides a from-scratch SHA-1 implementation with an
//! incremental API: data may be fed in any number of chunks and the digest
//! taken at any point, after which the hasher is ready for the next message.
//! The library is usable in both `std` and `no_std` environments.
//!
//! ```
//! use chdigest_algorithms::hash::Sha1Digest;
//!
//! let mut hasher = Sha1Digest::new();
//! hasher.update(b"xxabcxx", 2, 3);
//! assert_eq!(
//!     hasher.digest().to_hex(),
//!     "a9993e364706816aba3e25717850c26c9cd0d89d"
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Hash function implementations
pub mod hash;
pub use hash::{Sha1Algorithm, Sha1Digest, Sha1Output};

// Type system
pub mod types;
pub use types::{ConstantTimeEq, Digest};
