//! Host model traits
//!
//! The host owns the parameter model. This crate only reads it, apart
//! from the explicit navigation requests on [`CursorDevice`] and
//! [`ParameterBank`].

use kontrol_protocol::layout::MIDI_MAX;
use kontrol_protocol::ButtonEvent;

use crate::error::HostError;
use crate::lanes::LaneSlot;
use crate::mode::Mode;

/// Converts host parameter values into the 7-bit protocol domain
///
/// Implementations must be monotonic and deterministic, and round to the
/// nearest representable value.
pub trait ValueChanger {
    /// Convert a raw host value to `0..=127`
    fn to_midi_value(&self, value: f64) -> u8;
}

/// A single parameter slot of the host's parameter bank
pub trait Parameter {
    /// Whether a parameter is mapped to this slot
    fn does_exist(&self) -> bool;

    /// Whether the parameter is the host's selected one
    fn is_selected(&self) -> bool;

    /// Value as the host formats it for `width` characters (e.g. `"-3.2 dB"`)
    ///
    /// The host may abbreviate to fit; anything longer is cut by the caller.
    fn displayed_value(&self, width: usize) -> &str;

    /// Parameter name
    fn name(&self) -> &str;

    /// Raw value without modulation
    fn value(&self) -> f64;

    /// Effective value including live modulation
    fn modulated_value(&self) -> f64;
}

/// A bank that can be scrolled one page at a time
pub trait ScrollableBank {
    /// Whether an earlier page exists
    fn can_scroll_backwards(&self) -> bool;

    /// Whether a later page exists
    fn can_scroll_forwards(&self) -> bool;
}

/// The parameter bank of the cursor device: the lane source
///
/// Slot `i` of the current page feeds lane `i` of the surface.
pub trait ParameterBank: ScrollableBank {
    /// Parameter type held by the bank
    type Item: Parameter;

    /// Parameter in `slot` of the current page
    ///
    /// Returns `Ok(None)` if the bank holds fewer slots than the surface
    /// has lanes.
    fn item(&self, slot: LaneSlot) -> Result<Option<&Self::Item>, HostError>;

    /// Move to the previous page
    fn scroll_backwards(&mut self) -> Result<(), HostError>;

    /// Move to the next page
    fn scroll_forwards(&mut self) -> Result<(), HostError>;
}

/// Named parameter pages of the cursor device
pub trait ParameterPageBank {
    /// Name of the selected page
    fn selected_item(&self) -> &str;
}

/// The device the surface is currently following
pub trait CursorDevice {
    /// Parameter bank type
    type Parameters: ParameterBank;
    /// Sibling device bank type
    type Devices: ScrollableBank;
    /// Parameter page bank type
    type Pages: ParameterPageBank;

    /// Device name
    fn name(&self) -> &str;

    /// Parameters of the current page
    fn parameter_bank(&self) -> &Self::Parameters;

    /// Parameters of the current page, for scrolling
    fn parameter_bank_mut(&mut self) -> &mut Self::Parameters;

    /// Devices in the same chain
    fn device_bank(&self) -> &Self::Devices;

    /// Parameter pages
    fn parameter_page_bank(&self) -> &Self::Pages;

    /// Whether a device precedes this one in the chain
    fn can_select_previous_fx(&self) -> bool;

    /// Whether a device follows this one in the chain
    fn can_select_next_fx(&self) -> bool;

    /// Follow the previous device
    fn select_previous(&mut self) -> Result<(), HostError>;

    /// Follow the next device
    fn select_next(&mut self) -> Result<(), HostError>;
}

/// User configuration relevant to this mode
pub trait Configuration {
    /// Swap the track and clip navigation arrows
    fn is_flip_track_clip_navigation(&self) -> bool;
}

/// Host-side mode switching
///
/// Whether a repeated press while already in `mode` does anything is up
/// to the implementation.
pub trait ModeSwitcher {
    /// Handle a mode button event
    fn on_mode_button(
        &mut self,
        event: ButtonEvent,
        mode: Mode,
        label: &str,
    ) -> Result<(), HostError>;
}

/// Linear scaling of `0..=upper_bound` onto `0..=127`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearValueChanger {
    upper_bound: f64,
}

impl LinearValueChanger {
    /// Create a changer for host values in `0..=upper_bound`
    ///
    /// A non-positive or non-finite bound falls back to `1.0`.
    pub fn new(upper_bound: f64) -> Self {
        let upper_bound = if upper_bound.is_finite() && upper_bound > 0.0 {
            upper_bound
        } else {
            1.0
        };
        Self { upper_bound }
    }

    /// Upper end of the host range
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }
}

impl Default for LinearValueChanger {
    /// Normalized host values (`0.0..=1.0`)
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ValueChanger for LinearValueChanger {
    fn to_midi_value(&self, value: f64) -> u8 {
        // NaN compares false everywhere and lands on 0
        let normalized = if value > 0.0 {
            if value < self.upper_bound {
                value / self.upper_bound
            } else {
                1.0
            }
        } else {
            0.0
        };
        // Non-negative, so truncating after +0.5 rounds to nearest
        (normalized * MIDI_MAX as f64 + 0.5) as u8
    }
}
