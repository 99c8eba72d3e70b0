//! Collaborator traits
//!
//! These traits define the interface between the parameter-mode logic
//! and the host application, the surface transport and the mode system.

pub mod host;
pub mod transport;

pub use host::{
    Configuration, CursorDevice, LinearValueChanger, ModeSwitcher, Parameter, ParameterBank,
    ParameterPageBank, ScrollableBank, ValueChanger,
};
pub use transport::{SysExTransport, Transport, KONTROL_MIDI_CHANNEL};
