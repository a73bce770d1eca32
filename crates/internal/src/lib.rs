//! Internal utilities shared by the chdigest crates
//!
//! Nothing in here is part of the public API contract.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
