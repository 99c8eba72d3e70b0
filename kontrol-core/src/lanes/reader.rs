//! Per-lane state reading
//!
//! Reads one refresh worth of lane state out of the cursor device. The
//! reader never mutates the host; it is rebuilt for every refresh.

use heapless::{String, Vec};
use kontrol_protocol::layout::VALUE_TEXT_WIDTH;
use kontrol_protocol::{LaneText, LANE_COUNT};

use super::LaneSlot;
use crate::error::HostError;
use crate::traits::{CursorDevice, Parameter, ParameterBank, ParameterPageBank, ValueChanger};

/// Name shown for lanes without a parameter
pub const MISSING_NAME: &str = "None";

/// Separator between device, page and parameter name on the display
const LINE_BREAK: char = '\n';

/// Value text fitted to the display width
///
/// Sized for the fitted text in the worst case of 4-byte characters.
pub type ValueText = String<{ VALUE_TEXT_WIDTH * 4 }>;

/// State of all lanes, one entry per lane, in lane order
pub type LaneStates = Vec<LaneState, LANE_COUNT>;

/// Display state of one lane for one refresh
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LaneState {
    /// A parameter is mapped to the lane
    pub exists: bool,
    /// The lane's parameter is the host's selected one
    pub selected: bool,
    /// Value text, exactly [`VALUE_TEXT_WIDTH`] characters
    pub value_text: ValueText,
    /// `device\npage\nparameter`, or [`MISSING_NAME`]
    pub name: LaneText,
    /// Modulated value in `0..=127`
    pub level: u8,
}

impl LaneState {
    /// State of a lane with no parameter behind it
    pub fn missing() -> Self {
        Self {
            exists: false,
            selected: false,
            value_text: fit_value_text(""),
            name: fit_name(&[MISSING_NAME]),
            level: 0,
        }
    }
}

impl Default for LaneState {
    fn default() -> Self {
        Self::missing()
    }
}

/// Truncate or right-pad `text` to exactly [`VALUE_TEXT_WIDTH`] characters
///
/// Excess characters on the right are dropped; no ellipsis.
pub fn fit_value_text(text: &str) -> ValueText {
    let mut out = ValueText::new();
    let mut width = 0;
    for c in text.chars().take(VALUE_TEXT_WIDTH) {
        // Capacity covers VALUE_TEXT_WIDTH chars of any length
        let _ = out.push(c);
        width += 1;
    }
    while width < VALUE_TEXT_WIDTH {
        let _ = out.push(' ');
        width += 1;
    }
    out
}

/// Join name parts with line breaks, truncated at the text capacity
fn fit_name(parts: &[&str]) -> LaneText {
    let mut out = LaneText::new();
    'parts: for (i, part) in parts.iter().enumerate() {
        if i > 0 && out.push(LINE_BREAK).is_err() {
            break;
        }
        for c in part.chars() {
            if out.push(c).is_err() {
                break 'parts;
            }
        }
    }
    out
}

/// Reads lane state from a cursor device
pub struct BankStateReader<'a, D, V> {
    device: &'a D,
    value_changer: &'a V,
}

impl<'a, D: CursorDevice, V: ValueChanger> BankStateReader<'a, D, V> {
    /// Create a reader over `device`
    pub fn new(device: &'a D, value_changer: &'a V) -> Self {
        Self {
            device,
            value_changer,
        }
    }

    /// Read the state of a single lane
    pub fn read_lane(&self, slot: LaneSlot) -> Result<LaneState, HostError> {
        let device_name = self.device.name();
        let page_name = self.device.parameter_page_bank().selected_item();
        let state = match self.device.parameter_bank().item(slot)? {
            Some(param) => self.lane_state(param, device_name, page_name),
            None => LaneState::missing(),
        };
        Ok(state)
    }

    /// Read all lanes
    ///
    /// Always yields [`LANE_COUNT`] entries; slots the bank does not have
    /// read as [`LaneState::missing`].
    pub fn read_lanes(&self) -> Result<LaneStates, HostError> {
        let device_name = self.device.name();
        let page_name = self.device.parameter_page_bank().selected_item();

        let mut lanes = LaneStates::new();
        let mut short = 0u8;
        for slot in LaneSlot::all() {
            let state = match self.device.parameter_bank().item(slot)? {
                Some(param) => self.lane_state(param, device_name, page_name),
                None => {
                    short += 1;
                    LaneState::missing()
                }
            };
            // LaneSlot::all() yields exactly LANE_COUNT slots
            let _ = lanes.push(state);
        }

        if short > 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("parameter bank short by {=u8} lanes", short);
        }

        Ok(lanes)
    }

    /// Raw parameter value of `slot` scaled to `0..=127`
    ///
    /// `None` if the slot is empty or its parameter does not exist.
    pub fn parameter_value(&self, slot: LaneSlot) -> Result<Option<u8>, HostError> {
        let value = self
            .device
            .parameter_bank()
            .item(slot)?
            .filter(|param| param.does_exist())
            .map(|param| self.value_changer.to_midi_value(param.value()));
        Ok(value)
    }

    fn lane_state(
        &self,
        param: &<D::Parameters as ParameterBank>::Item,
        device_name: &str,
        page_name: &str,
    ) -> LaneState {
        let exists = param.does_exist();
        let (value_text, name) = if exists {
            (
                fit_value_text(param.displayed_value(VALUE_TEXT_WIDTH)),
                fit_name(&[device_name, page_name, param.name()]),
            )
        } else {
            (fit_value_text(""), fit_name(&[MISSING_NAME]))
        };

        LaneState {
            exists,
            selected: param.is_selected(),
            value_text,
            name,
            level: self.value_changer.to_midi_value(param.modulated_value()),
        }
    }
}
