//! Host-agnostic logic for the Kontrol parameter mode
//!
//! This crate contains everything between the host's parameter model and
//! the surface wire protocol that does not depend on a particular host API:
//!
//! - Host collaborator traits (parameter bank, cursor device, transport)
//! - Control index resolution
//! - Lane state reading and navigation state packing
//! - Display frame sequencing and the refresh driver
//! - Mode button dispatch
//! - Configuration and error types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod lanes;
pub mod mode;
pub mod refresh;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use config::KontrolConfig;
pub use error::{HostError, KontrolError, TransportError};
pub use lanes::{LaneSlot, LaneState};
pub use mode::{Mode, ModeButtonCommand, ParamsMode};
pub use refresh::{RefreshDriver, RefreshReport};
