//! Choreography timeline
//!
//! A choreography file is plain text, one tick per line, fields separated
//! by `;`. Column `i` holds the position for the `i`-th configured device;
//! columns beyond the device count are ignored. There is no header, no
//! comment syntax and no escaping.
//!
//! ```text
//! 4000;4000;1200;0
//! 4000;3900;1250;0
//! 0;0;0;0
//! ```
//!
//! Loading is all-or-nothing: any malformed line rejects the whole file.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use crate::encoding::{EncodedFrame, Position};

/// Field separator
pub const FIELD_SEPARATOR: char = ';';

/// Errors while loading a choreography
///
/// Line and column numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// A frame needs at least one device column
    #[error("device count must be at least 1")]
    NoDevices,
    /// The source holds no lines
    #[error("choreography is empty")]
    Empty,
    /// A line holds fewer fields than there are devices
    #[error("line {line}: expected at least {expected} fields, found {found}")]
    TooFewFields {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A field is not an integer
    #[error("line {line}, field {column}: '{value}' is not an integer")]
    InvalidField {
        line: usize,
        column: usize,
        value: String,
    },
    /// A field is an integer outside 0..=65535
    #[error("line {line}, field {column}: {value} does not fit in two bytes")]
    OutOfRange {
        line: usize,
        column: usize,
        value: i64,
    },
}

/// One tick's worth of encoded positions, one per configured device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    values: Vec<EncodedFrame>,
}

impl Frame {
    /// Build a frame from already encoded values
    pub fn new(values: Vec<EncodedFrame>) -> Self {
        Self { values }
    }

    /// The same position for every one of `device_count` devices
    pub fn broadcast(position: Position, device_count: usize) -> Self {
        Self {
            values: alloc::vec![EncodedFrame::from_position(position); device_count],
        }
    }

    /// Number of devices covered
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the frame covers no devices
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values in device order
    pub fn values(&self) -> &[EncodedFrame] {
        &self.values
    }

    /// Reset frames carry position 0 in the first column
    ///
    /// Only the first device is inspected; the others may hold anything.
    pub fn is_reset_frame(&self) -> bool {
        self.values.first().is_some_and(|v| v.is_zero())
    }
}

impl fmt::Display for Frame {
    /// Decoded positions as right-aligned columns
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.values {
            write!(f, "{:>6}", value.position())?;
        }
        Ok(())
    }
}

/// The full choreography, replayed in a loop
///
/// Immutable once loaded. Every frame has exactly `device_count` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    frames: Vec<Frame>,
    device_count: usize,
}

impl Timeline {
    /// Parse choreography text for `device_count` devices
    pub fn parse(source: &str, device_count: usize) -> Result<Self, LoadError> {
        if device_count == 0 {
            return Err(LoadError::NoDevices);
        }

        let frames = source
            .lines()
            .enumerate()
            .map(|(index, line)| parse_line(line, index + 1, device_count))
            .collect::<Result<Vec<_>, _>>()?;

        if frames.is_empty() {
            return Err(LoadError::Empty);
        }

        Ok(Self {
            frames,
            device_count,
        })
    }

    /// Build from frames that are already encoded
    ///
    /// Returns `None` if `frames` is empty or the widths disagree.
    pub fn from_frames(frames: Vec<Frame>) -> Option<Self> {
        let device_count = frames.first()?.len();
        if device_count == 0 || frames.iter().any(|f| f.len() != device_count) {
            return None;
        }
        Some(Self {
            frames,
            device_count,
        })
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false for a parsed timeline
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Width of every frame
    pub fn device_count(&self) -> usize {
        self.device_count
    }

    /// Frames in playback order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Count of reset frames (pause points authored into the data)
    pub fn reset_frame_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_reset_frame()).count()
    }
}

fn parse_line(line: &str, line_no: usize, device_count: usize) -> Result<Frame, LoadError> {
    let mut values = Vec::with_capacity(device_count);
    let mut fields = line.split(FIELD_SEPARATOR);

    for column in 1..=device_count {
        let field = fields.next().ok_or(LoadError::TooFewFields {
            line: line_no,
            expected: device_count,
            found: column - 1,
        })?;
        values.push(parse_field(field, line_no, column)?);
    }

    Ok(Frame::new(values))
}

fn parse_field(field: &str, line: usize, column: usize) -> Result<EncodedFrame, LoadError> {
    let field = field.trim();
    let value: i64 = field.parse().map_err(|_| LoadError::InvalidField {
        line,
        column,
        value: field.to_string(),
    })?;
    let position = Position::try_from(value).map_err(|_| LoadError::OutOfRange {
        line,
        column,
        value,
    })?;
    Ok(EncodedFrame::from_position(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;
    use proptest::prelude::*;

    fn bytes(frame: &Frame) -> Vec<[u8; 2]> {
        frame.values().iter().map(|v| v.bytes()).collect()
    }

    #[test]
    fn test_parse_two_frames() {
        let timeline = Timeline::parse("10;20;30\n0;0;0\n", 3).unwrap();

        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.device_count(), 3);
        assert_eq!(bytes(&timeline.frames()[0]), vec![[0, 10], [0, 20], [0, 30]]);
        assert_eq!(bytes(&timeline.frames()[1]), vec![[0, 0], [0, 0], [0, 0]]);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let timeline = Timeline::parse("1;2;3;4;5\n", 2).unwrap();
        assert_eq!(bytes(&timeline.frames()[0]), vec![[0, 1], [0, 2]]);

        // Trailing garbage beyond the device count is never parsed
        let timeline = Timeline::parse("1;2;not-a-number\n", 2).unwrap();
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_whitespace_and_crlf() {
        let timeline = Timeline::parse(" 256 ; 4000\r\n", 2).unwrap();
        assert_eq!(bytes(&timeline.frames()[0]), vec![[1, 0], [15, 160]]);
    }

    #[test]
    fn test_too_few_fields() {
        let err = Timeline::parse("1;2;3\n4;5\n", 3).unwrap_err();
        assert_eq!(
            err,
            LoadError::TooFewFields {
                line: 2,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_blank_line_is_rejected() {
        let err = Timeline::parse("1;2\n\n3;4\n", 2).unwrap_err();
        assert!(matches!(err, LoadError::InvalidField { line: 2, column: 1, .. }));
    }

    #[test]
    fn test_invalid_field() {
        let err = Timeline::parse("1;x;3\n", 3).unwrap_err();
        assert_eq!(
            err,
            LoadError::InvalidField {
                line: 1,
                column: 2,
                value: "x".into()
            }
        );
        assert_eq!(
            format!("{}", err),
            "line 1, field 2: 'x' is not an integer"
        );
    }

    #[test]
    fn test_out_of_range() {
        let err = Timeline::parse("65536\n", 1).unwrap_err();
        assert_eq!(
            err,
            LoadError::OutOfRange {
                line: 1,
                column: 1,
                value: 65536
            }
        );

        let err = Timeline::parse("-1\n", 1).unwrap_err();
        assert!(matches!(err, LoadError::OutOfRange { value: -1, .. }));
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(Timeline::parse("", 3), Err(LoadError::Empty));
    }

    #[test]
    fn test_zero_devices() {
        assert_eq!(Timeline::parse("1;2\n", 0), Err(LoadError::NoDevices));
    }

    #[test]
    fn test_reset_frame_predicate_only_checks_first_entry() {
        let reset = Frame::new(vec![
            EncodedFrame::ZERO,
            EncodedFrame::from_position(4000),
            EncodedFrame::from_position(12),
        ]);
        assert!(reset.is_reset_frame());

        let not_reset = Frame::new(vec![
            EncodedFrame::from_position(1),
            EncodedFrame::ZERO,
            EncodedFrame::ZERO,
        ]);
        assert!(!not_reset.is_reset_frame());

        // 256 encodes as [1, 0], which is not the zero encoding
        let high_byte_only = Frame::new(vec![EncodedFrame::from_position(256)]);
        assert!(!high_byte_only.is_reset_frame());
    }

    #[test]
    fn test_broadcast() {
        let frame = Frame::broadcast(0, 4);
        assert_eq!(frame.len(), 4);
        assert!(frame.values().iter().all(|v| v.is_zero()));
        assert!(frame.is_reset_frame());
    }

    #[test]
    fn test_display_right_aligns_positions() {
        let frame = Frame::new(vec![
            EncodedFrame::from_position(0),
            EncodedFrame::from_position(4000),
        ]);
        assert_eq!(format!("{}", frame), "     0  4000");
    }

    #[test]
    fn test_from_frames_checks_width() {
        assert!(Timeline::from_frames(vec![]).is_none());
        assert!(Timeline::from_frames(vec![Frame::broadcast(1, 2), Frame::broadcast(1, 3)])
            .is_none());

        let timeline =
            Timeline::from_frames(vec![Frame::broadcast(1, 2), Frame::broadcast(0, 2)]).unwrap();
        assert_eq!(timeline.device_count(), 2);
        assert_eq!(timeline.reset_frame_count(), 1);
    }

    proptest! {
        #[test]
        fn prop_parse_preserves_rows(
            rows in proptest::collection::vec(proptest::collection::vec(any::<u16>(), 3), 1..20)
        ) {
            let source: String = rows
                .iter()
                .map(|row| {
                    let fields: Vec<String> = row.iter().map(|v| format!("{}", v)).collect();
                    format!("{}\n", fields.join(";"))
                })
                .collect();

            let timeline = Timeline::parse(&source, 3).unwrap();
            prop_assert_eq!(timeline.len(), rows.len());
            for (frame, row) in timeline.frames().iter().zip(&rows) {
                let decoded: Vec<u16> = frame.values().iter().map(|v| v.position()).collect();
                prop_assert_eq!(&decoded, row);
            }
        }
    }
}
