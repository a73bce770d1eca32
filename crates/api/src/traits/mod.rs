//! Trait definitions for digest operations in chdigest

pub mod hash;
pub mod serialize;

pub use hash::HashAlgorithm;
pub use serialize::Serialize;
