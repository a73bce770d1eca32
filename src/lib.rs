//! # chdigest
//!
//! A streaming SHA-1 digest whose running state stays under the caller's
//! control, for challenge-response protocols that splice their own bytes and
//! lengths into a hash.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! chdigest = "0.3"
//! ```
//!
//! ```
//! use chdigest::prelude::*;
//!
//! let mut hasher = Sha1Digest::new();
//! hasher.update(b"abc", 0, 3);
//! assert_eq!(hasher.digest().to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::io::Write` for the hasher and `std::error::Error`
//!   for the error types
//! - `alloc`: hex string output for digests
//! - `serde`: digests serialize as lowercase hex strings
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`chdigest-api`]: Error type and public traits
//! - [`chdigest-internal`]: Endian and constant-time helpers
//! - [`chdigest-algorithms`]: The SHA-1 implementation and digest type

#![cfg_attr(not(feature = "std"), no_std)]

pub use chdigest_algorithms as algorithms;
pub use chdigest_api as api;
pub use chdigest_internal as internal;

/// Common imports for chdigest users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{HashAlgorithm, Serialize};

    // Hashing
    pub use crate::algorithms::{Sha1Algorithm, Sha1Digest, Sha1Output};

    // Digest values
    pub use crate::algorithms::{ConstantTimeEq, Digest};

    // Memory hygiene
    pub use zeroize::Zeroize;
}
