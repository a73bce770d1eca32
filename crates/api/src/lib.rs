//! Public API traits and types for the chdigest library
//!
//! This crate provides the public API surface shared by the chdigest crates:
//! the error type and the traits describing hash algorithms and
//! serializable values.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::{HashAlgorithm, Serialize};
