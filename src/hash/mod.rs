//! The built-in 32-bit string hashes, one per module.
//!
//! Every function maps a byte slice to a `u32` with unsigned wraparound
//! arithmetic; overflow is part of the definition, not a fault.

pub mod acc;
pub mod acc_mul;
pub mod dek;
pub mod djb2;
pub mod jenkins;
pub mod sdbm;
