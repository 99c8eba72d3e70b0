//! Configuration types
//!
//! User-facing settings of the parameter mode. The control layout itself
//! is a protocol constant and lives in `kontrol-protocol`.

pub mod types;

pub use types::*;
