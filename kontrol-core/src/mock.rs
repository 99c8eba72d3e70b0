//! Test doubles for the host collaborators

use std::cell::Cell;
use std::string::String;
use std::vec::Vec;

use kontrol_protocol::{ButtonEvent, ControlIndex, DisplayFrame};

use crate::error::{HostError, TransportError};
use crate::lanes::LaneSlot;
use crate::mode::Mode;
use crate::traits::{
    Configuration, CursorDevice, ModeSwitcher, Parameter, ParameterBank, ParameterPageBank, ScrollableBank,
    Transport,
};

#[derive(Debug, Clone)]
pub struct MockParameter {
    pub exists: bool,
    pub selected: bool,
    pub name: String,
    pub displayed: String,
    /// Returned instead of `displayed` when that exceeds the requested width
    pub short: Option<String>,
    pub value: f64,
    pub modulated: f64,
}

impl MockParameter {
    pub fn new(name: &str, displayed: &str, value: f64) -> Self {
        Self {
            exists: true,
            selected: false,
            name: name.into(),
            displayed: displayed.into(),
            short: None,
            value,
            modulated: value,
        }
    }

    /// Slot present in the bank but with nothing mapped to it
    pub fn absent() -> Self {
        Self {
            exists: false,
            ..Self::new("", "", 0.0)
        }
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn abbreviated(mut self, short: &str) -> Self {
        self.short = Some(short.into());
        self
    }

    pub fn modulated(mut self, value: f64) -> Self {
        self.modulated = value;
        self
    }
}

impl Parameter for MockParameter {
    fn does_exist(&self) -> bool {
        self.exists
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn displayed_value(&self, width: usize) -> &str {
        match &self.short {
            Some(short) if self.displayed.chars().count() > width => short,
            _ => &self.displayed,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn modulated_value(&self) -> f64 {
        self.modulated
    }
}

#[derive(Debug, Default)]
pub struct MockBank {
    pub params: Vec<MockParameter>,
    pub can_back: bool,
    pub can_fwd: bool,
    pub fail: bool,
    /// Number of `item` calls
    pub lookups: Cell<usize>,
    pub scrolled_back: usize,
    pub scrolled_fwd: usize,
}

impl ScrollableBank for MockBank {
    fn can_scroll_backwards(&self) -> bool {
        self.can_back
    }

    fn can_scroll_forwards(&self) -> bool {
        self.can_fwd
    }
}

impl ParameterBank for MockBank {
    type Item = MockParameter;

    fn item(&self, slot: LaneSlot) -> Result<Option<&MockParameter>, HostError> {
        self.lookups.set(self.lookups.get() + 1);
        if self.fail {
            return Err(HostError::Unavailable);
        }
        Ok(self.params.get(slot.index() as usize))
    }

    fn scroll_backwards(&mut self) -> Result<(), HostError> {
        if self.fail {
            return Err(HostError::Unavailable);
        }
        self.scrolled_back += 1;
        Ok(())
    }

    fn scroll_forwards(&mut self) -> Result<(), HostError> {
        if self.fail {
            return Err(HostError::Unavailable);
        }
        self.scrolled_fwd += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MockDeviceBank {
    pub can_back: bool,
    pub can_fwd: bool,
}

impl ScrollableBank for MockDeviceBank {
    fn can_scroll_backwards(&self) -> bool {
        self.can_back
    }

    fn can_scroll_forwards(&self) -> bool {
        self.can_fwd
    }
}

#[derive(Debug, Default)]
pub struct MockPages {
    pub selected: String,
}

impl ParameterPageBank for MockPages {
    fn selected_item(&self) -> &str {
        &self.selected
    }
}

#[derive(Debug, Default)]
pub struct MockDevice {
    pub name: String,
    pub params: MockBank,
    pub devices: MockDeviceBank,
    pub pages: MockPages,
    pub prev_fx: bool,
    pub next_fx: bool,
    pub selected_previous: usize,
    pub selected_next: usize,
}

impl MockDevice {
    pub fn new(name: &str, page: &str) -> Self {
        Self {
            name: name.into(),
            pages: MockPages {
                selected: page.into(),
            },
            ..Self::default()
        }
    }

    pub fn with_parameter(mut self, param: MockParameter) -> Self {
        self.params.params.push(param);
        self
    }

    pub fn with_param_scroll(mut self, back: bool, fwd: bool) -> Self {
        self.params.can_back = back;
        self.params.can_fwd = fwd;
        self
    }

    pub fn with_device_scroll(mut self, back: bool, fwd: bool) -> Self {
        self.devices.can_back = back;
        self.devices.can_fwd = fwd;
        self
    }

    pub fn with_fx_selection(mut self, previous: bool, next: bool) -> Self {
        self.prev_fx = previous;
        self.next_fx = next;
        self
    }

    /// Every parameter bank call fails
    pub fn failing_bank(mut self) -> Self {
        self.params.fail = true;
        self
    }
}

impl CursorDevice for MockDevice {
    type Parameters = MockBank;
    type Devices = MockDeviceBank;
    type Pages = MockPages;

    fn name(&self) -> &str {
        &self.name
    }

    fn parameter_bank(&self) -> &MockBank {
        &self.params
    }

    fn parameter_bank_mut(&mut self) -> &mut MockBank {
        &mut self.params
    }

    fn device_bank(&self) -> &MockDeviceBank {
        &self.devices
    }

    fn parameter_page_bank(&self) -> &MockPages {
        &self.pages
    }

    fn can_select_previous_fx(&self) -> bool {
        self.prev_fx
    }

    fn can_select_next_fx(&self) -> bool {
        self.next_fx
    }

    fn select_previous(&mut self) -> Result<(), HostError> {
        self.selected_previous += 1;
        Ok(())
    }

    fn select_next(&mut self) -> Result<(), HostError> {
        self.selected_next += 1;
        Ok(())
    }
}

/// Everything sent to the surface, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Frame(DisplayFrame),
    Control(ControlIndex, u8),
}

/// Transport that records every call
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub sent: Vec<Sent>,
    /// Fail once this many calls have succeeded
    pub fail_after: Option<usize>,
}

impl RecordingTransport {
    pub fn failing_after(calls: usize) -> Self {
        Self {
            fail_after: Some(calls),
            ..Self::default()
        }
    }

    pub fn frames(&self) -> Vec<&DisplayFrame> {
        self.sent
            .iter()
            .filter_map(|sent| match sent {
                Sent::Frame(frame) => Some(frame),
                Sent::Control(..) => None,
            })
            .collect()
    }

    pub fn controls(&self) -> Vec<(ControlIndex, u8)> {
        self.sent
            .iter()
            .filter_map(|sent| match sent {
                Sent::Control(index, value) => Some((*index, *value)),
                Sent::Frame(_) => None,
            })
            .collect()
    }

    fn record(&mut self, sent: Sent) -> Result<(), TransportError> {
        if self.fail_after.is_some_and(|limit| self.sent.len() >= limit) {
            return Err(TransportError::Io);
        }
        self.sent.push(sent);
        Ok(())
    }
}

impl Transport for RecordingTransport {
    fn send_frame(&mut self, frame: &DisplayFrame) -> Result<(), TransportError> {
        self.record(Sent::Frame(frame.clone()))
    }

    fn send_control_value(
        &mut self,
        index: ControlIndex,
        value: u8,
    ) -> Result<(), TransportError> {
        self.record(Sent::Control(index, value))
    }
}

/// Configuration that counts how often it is read
#[derive(Debug, Default)]
pub struct CountingConfig {
    pub flip: bool,
    pub reads: Cell<usize>,
}

impl Configuration for CountingConfig {
    fn is_flip_track_clip_navigation(&self) -> bool {
        self.reads.set(self.reads.get() + 1);
        self.flip
    }
}

#[derive(Debug, Default)]
pub struct RecordingModeSwitcher {
    pub calls: Vec<(ButtonEvent, Mode, String)>,
    pub reject: bool,
}

impl ModeSwitcher for RecordingModeSwitcher {
    fn on_mode_button(
        &mut self,
        event: ButtonEvent,
        mode: Mode,
        label: &str,
    ) -> Result<(), HostError> {
        if self.reject {
            return Err(HostError::Rejected);
        }
        self.calls.push((event, mode, label.into()));
        Ok(())
    }
}
