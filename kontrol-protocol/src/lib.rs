//! Kontrol Lane Display Protocol
//!
//! This crate defines the wire protocol between the host bridge and the
//! keyboard's control surface firmware. The surface shows one column per
//! lane (8 lanes) and reports knob and navigation controls back as
//! control-change indices.
//!
//! # Protocol Overview
//!
//! Display updates are vendor System Exclusive messages:
//! ```text
//! ┌────┬─────────────────────────────┬─────┬───────┬──────┬──────────┬────┐
//! │ F0 │ 00 21 09 00 00 44 43 01 00  │ CMD │ VALUE │ LANE │ DATA...  │ F7 │
//! │ 1B │ 9B vendor/device header     │ 1B  │ 1B    │ 1B   │ 0–114B   │ 1B │
//! └────┴─────────────────────────────┴─────┴───────┴──────┴──────────┴────┘
//! ```
//!
//! The protocol has no sequence numbers. The firmware applies messages in
//! arrival order, so senders must never reorder frames.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod events;
pub mod frame;
pub mod layout;
pub mod messages;

pub use events::ButtonEvent;
pub use frame::{FrameError, SysExFrame, SysExParser, MAX_DATA_SIZE, MAX_SYSEX_SIZE};
pub use layout::{ControlIndex, ControlLayout, KONTROL_LAYOUT, LANE_COUNT};
pub use messages::{DisplayFrame, FrameKind, FramePayload, LaneText, LaneType, VuLevels};
