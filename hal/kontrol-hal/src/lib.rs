//! Kontrol Hardware Abstraction Layer
//!
//! This crate defines the MIDI port traits the surface bridge writes to.
//! Platform backends (a host MIDI API, a USB MIDI class driver, a serial
//! DIN port) implement them so the same bridge logic runs everywhere.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Bridge logic (kontrol-core)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  kontrol-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  host MIDI    │       │ serial stream │
//! │   backend     │       │ (embedded-io) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`midi::MidiOut`], [`midi::MidiIn`] - MIDI message transport

#![no_std]
#![deny(unsafe_code)]

pub mod midi;

// Re-export key traits at crate root for convenience
pub use midi::{MidiChannel, MidiIn, MidiOut, SerialMidiOut};
