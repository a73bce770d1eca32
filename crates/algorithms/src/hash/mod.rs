//! Hash function implementations
//!
//! Only SHA-1 lives here. It is kept for protocols that still require it and
//! exposes its running state so those protocols can splice bytes into it.

pub mod sha1;

// Re-exports
pub use sha1::{Sha1Algorithm, Sha1Digest, Sha1Output, SHA1_BLOCK_SIZE, SHA1_OUTPUT_SIZE};

pub use chdigest_api::HashAlgorithm;
