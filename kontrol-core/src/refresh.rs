//! Display refresh
//!
//! One refresh reads the cursor device, sends the full frame sequence and
//! then the navigation control values:
//!
//! ```text
//! read lanes ──► 49 display frames ──► TRACKS, BANKS, CLIPS, SCENES values
//! ```
//!
//! A refresh holds no state between calls; two refreshes over an
//! unchanged host send identical sequences.

use kontrol_protocol::{ControlLayout, KONTROL_LAYOUT};

use crate::error::{KontrolError, TransportError};
use crate::lanes::{encode_lanes, BankStateReader, NavigationStateEncoder, NavigationStates};
use crate::traits::{Configuration, CursorDevice, Transport, ValueChanger};

/// Outcome of a successful refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshReport {
    /// Display frames written
    pub frames_sent: usize,
    /// Navigation states pushed after the frames
    pub navigation: NavigationStates,
}

/// Drives display refreshes over a transport
pub struct RefreshDriver<T> {
    transport: T,
    layout: ControlLayout,
}

impl<T: Transport> RefreshDriver<T> {
    /// Create a driver for the standard surface layout
    pub fn new(transport: T) -> Self {
        Self::with_layout(transport, KONTROL_LAYOUT)
    }

    /// Create a driver sending navigation values to `layout`'s indices
    pub fn with_layout(transport: T, layout: ControlLayout) -> Self {
        Self { transport, layout }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    pub fn layout(&self) -> &ControlLayout {
        &self.layout
    }

    /// Send the current state of `device` to the surface
    ///
    /// Stops at the first failing collaborator call; frames already sent
    /// stay sent.
    pub fn refresh<D, V, C>(
        &mut self,
        device: &D,
        value_changer: &V,
        configuration: &C,
    ) -> Result<RefreshReport, KontrolError>
    where
        D: CursorDevice,
        V: ValueChanger,
        C: Configuration,
    {
        let flip = configuration.is_flip_track_clip_navigation();
        let lanes = BankStateReader::new(device, value_changer).read_lanes()?;

        let mut frames_sent = 0;
        for frame in encode_lanes(&lanes) {
            self.transport.send_frame(&frame).map_err(log_failure)?;
            frames_sent += 1;
        }

        let navigation = NavigationStateEncoder::new(device).states(flip);
        for (index, value) in navigation.control_values(&self.layout) {
            self.transport
                .send_control_value(index, value)
                .map_err(log_failure)?;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "refresh: {=usize} frames, flip={=bool}, nav={}",
            frames_sent,
            flip,
            navigation
        );

        Ok(RefreshReport {
            frames_sent,
            navigation,
        })
    }
}

fn log_failure(e: TransportError) -> TransportError {
    #[cfg(feature = "defmt")]
    defmt::warn!("transport write failed: {}", e);
    e
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KontrolConfig;
    use crate::error::HostError;
    use crate::lanes::FRAMES_PER_REFRESH;
    use crate::mock::{CountingConfig, MockDevice, MockParameter, RecordingTransport, Sent};
    use crate::traits::LinearValueChanger;
    use kontrol_protocol::{DisplayFrame, FrameKind};

    fn device() -> MockDevice {
        MockDevice::new("EQ", "Band 1")
            .with_parameter(MockParameter::new("Freq", "Vol:  50", 0.5).selected())
            .with_parameter(MockParameter::new("Gain", "+3.0 dB", 0.75))
            .with_param_scroll(true, false)
            .with_device_scroll(true, true)
            .with_fx_selection(true, false)
    }

    #[test]
    fn test_frames_then_navigation() {
        let mut driver = RefreshDriver::new(RecordingTransport::default());
        let report = driver
            .refresh(&device(), &LinearValueChanger::default(), &KontrolConfig::default())
            .unwrap();

        assert_eq!(report.frames_sent, FRAMES_PER_REFRESH);

        let sent = &driver.transport().sent;
        assert_eq!(sent.len(), FRAMES_PER_REFRESH + 4);
        assert!(sent[..FRAMES_PER_REFRESH]
            .iter()
            .all(|s| matches!(s, Sent::Frame(_))));
        assert!(matches!(
            &sent[FRAMES_PER_REFRESH - 1],
            Sent::Frame(f) if f.kind == FrameKind::VuLevels
        ));
        assert_eq!(
            driver.transport().controls(),
            vec![(0x30, 1), (0x31, 1), (0x32, 3), (0x33, 0)]
        );
    }

    #[test]
    fn test_first_lane_frames() {
        let mut driver = RefreshDriver::new(RecordingTransport::default());
        driver
            .refresh(&device(), &LinearValueChanger::default(), &KontrolConfig::default())
            .unwrap();

        let frames = driver.transport().frames();
        assert_eq!(*frames[3], DisplayFrame::value_text(0, "Vol:  50"));
        assert_eq!(*frames[4], DisplayFrame::pan_text(0, "Vol:  50"));
        assert_eq!(*frames[5], DisplayFrame::name(0, "EQ\nBand 1\nFreq"));
        assert_eq!(*frames[11], DisplayFrame::name(1, "EQ\nBand 1\nGain"));
        // Bank holds two parameters; lane 2 onward is padded
        assert_eq!(*frames[17], DisplayFrame::name(2, "None"));
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let device = device();
        let vc = LinearValueChanger::default();
        let config = KontrolConfig::default();

        let mut first = RefreshDriver::new(RecordingTransport::default());
        let mut second = RefreshDriver::new(RecordingTransport::default());
        first.refresh(&device, &vc, &config).unwrap();
        second.refresh(&device, &vc, &config).unwrap();
        second.transport_mut().sent.clear();
        second.refresh(&device, &vc, &config).unwrap();

        assert_eq!(first.transport().sent, second.transport().sent);
    }

    #[test]
    fn test_flip_swaps_track_and_clip_values() {
        let config = KontrolConfig {
            flip_track_clip_navigation: true,
        };
        let mut driver = RefreshDriver::new(RecordingTransport::default());
        let report = driver
            .refresh(&device(), &LinearValueChanger::default(), &config)
            .unwrap();

        assert_eq!(report.navigation.tracks.value(), 3);
        assert_eq!(report.navigation.clips.value(), 1);
        assert_eq!(
            driver.transport().controls(),
            vec![(0x30, 3), (0x31, 1), (0x32, 1), (0x33, 0)]
        );
    }

    #[test]
    fn test_transport_failure_stops_refresh() {
        let mut driver = RefreshDriver::new(RecordingTransport::failing_after(10));
        let result = driver.refresh(
            &device(),
            &LinearValueChanger::default(),
            &KontrolConfig::default(),
        );

        assert_eq!(result, Err(KontrolError::Transport(TransportError::Io)));
        assert_eq!(driver.transport().sent.len(), 10);
    }

    #[test]
    fn test_configuration_read_once_before_sending() {
        let config = CountingConfig {
            flip: true,
            ..CountingConfig::default()
        };
        let mut driver = RefreshDriver::new(RecordingTransport::failing_after(0));
        let result = driver.refresh(&device(), &LinearValueChanger::default(), &config);

        assert_eq!(result, Err(KontrolError::Transport(TransportError::Io)));
        assert_eq!(config.reads.get(), 1);

        let mut driver = RefreshDriver::new(RecordingTransport::default());
        driver
            .refresh(&device(), &LinearValueChanger::default(), &config)
            .unwrap();
        assert_eq!(config.reads.get(), 2);
    }

    #[test]
    fn test_host_failure_sends_nothing() {
        let mut driver = RefreshDriver::new(RecordingTransport::default());
        let result = driver.refresh(
            &device().failing_bank(),
            &LinearValueChanger::default(),
            &KontrolConfig::default(),
        );

        assert_eq!(result, Err(KontrolError::Host(HostError::Unavailable)));
        assert!(driver.transport().sent.is_empty());
    }
}
