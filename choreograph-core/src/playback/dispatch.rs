//! Frame dispatch
//!
//! Writes one frame to the bus, device by device, in configured address
//! order. A failing device is logged and skipped; it never prevents the
//! remaining devices from being written.

use log::{info, warn};

use crate::config::{DeviceAddress, PlaybackConfig};
use crate::encoding::{EncodedFrame, Position};
use crate::timeline::Frame;
use crate::traits::BusTransport;

/// What happened to each device of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchReport {
    /// Writes that succeeded
    pub sent: usize,
    /// Devices left alone because they hold the middle position
    pub skipped: usize,
    /// Writes that failed
    pub failed: usize,
}

impl DispatchReport {
    /// Number of `send` calls made
    pub fn attempted(&self) -> usize {
        self.sent + self.failed
    }

    /// Check that no write failed
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Write `frame` to `devices`, skipping middle-position entries
///
/// Entry `i` of the frame goes to `devices[i]`.
pub fn send_positions<T: BusTransport + ?Sized>(
    transport: &mut T,
    devices: &[DeviceAddress],
    frame: &Frame,
    middle: EncodedFrame,
) -> DispatchReport {
    let mut report = DispatchReport::default();

    for (&address, value) in devices.iter().zip(frame.values().iter().copied()) {
        if value == middle {
            report.skipped += 1;
            continue;
        }

        match transport.send(address, value) {
            Ok(()) => report.sent += 1,
            Err(e) => {
                warn!("Failed to write to address {}: {}", address, e);
                report.failed += 1;
            }
        }
    }

    report
}

/// Send one position to every configured device, once
///
/// The one-shot path used to park all slaves at a known position. It
/// shares the dispatch rules of playback, including the middle-position
/// skip.
pub fn broadcast_position<T: BusTransport + ?Sized>(
    transport: &mut T,
    config: &PlaybackConfig,
    position: Position,
) -> DispatchReport {
    info!(
        "Sending position {} to I2C addresses {:?}",
        position,
        config.devices.as_slice()
    );

    let frame = Frame::broadcast(position, config.device_count());
    let report = send_positions(transport, &config.devices, &frame, config.middle_encoded());

    if report.skipped == config.device_count() {
        warn!(
            "Position {} is the middle position; nothing was written",
            position
        );
    }

    report
}
