//! Error types
//!
//! Unknown control indices and short banks are not errors here; they
//! resolve to defaults. Only failing collaborators surface as errors.

use kontrol_protocol::FrameError;

/// A host collaborator call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostError {
    /// The host object is not reachable (project closing, device removed)
    Unavailable,
    /// The host refused the request
    Rejected,
}

/// The transport could not deliver a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Underlying MIDI port failed
    Io,
    /// Frame could not be encoded
    Encode(FrameError),
}

impl From<FrameError> for TransportError {
    fn from(e: FrameError) -> Self {
        TransportError::Encode(e)
    }
}

/// Errors returned by refresh, knob readback and command dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KontrolError {
    /// Host collaborator failure, propagated unchanged
    Host(HostError),
    /// Transport failure, propagated unchanged
    Transport(TransportError),
}

impl From<HostError> for KontrolError {
    fn from(e: HostError) -> Self {
        KontrolError::Host(e)
    }
}

impl From<TransportError> for KontrolError {
    fn from(e: TransportError) -> Self {
        KontrolError::Transport(e)
    }
}
