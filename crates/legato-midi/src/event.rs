//! MIDI channel and realtime events.
//!
//! [`MidiEvent`] carries fully decoded messages with their channel and data
//! bytes. Channels are zero-based (`0..=15`), data bytes are 7-bit.
//!
//! Decoding from the wire is handled by [`MidiEvent::parse`], which accepts a
//! single complete message. Running status and system exclusive messages are
//! not decoded.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Center value of the 14-bit pitch bend range.
pub const PITCH_BEND_CENTER: u16 = 8192;

/// Highest 14-bit pitch bend value.
pub const PITCH_BEND_MAX: u16 = 16383;

/// System realtime messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Realtime {
    /// Timing clock (0xF8), 24 per quarter note.
    Clock,
    /// Start (0xFA).
    Start,
    /// Continue (0xFB).
    Continue,
    /// Stop (0xFC).
    Stop,
    /// Active sensing (0xFE).
    ActiveSensing,
    /// System reset (0xFF).
    Reset,
}

impl Realtime {
    /// Decode a realtime status byte.
    pub fn from_status(status: u8) -> Option<Self> {
        match status {
            0xF8 => Some(Self::Clock),
            0xFA => Some(Self::Start),
            0xFB => Some(Self::Continue),
            0xFC => Some(Self::Stop),
            0xFE => Some(Self::ActiveSensing),
            0xFF => Some(Self::Reset),
            _ => None,
        }
    }

    /// The status byte of this message.
    pub fn status(self) -> u8 {
        match self {
            Self::Clock => 0xF8,
            Self::Start => 0xFA,
            Self::Continue => 0xFB,
            Self::Stop => 0xFC,
            Self::ActiveSensing => 0xFE,
            Self::Reset => 0xFF,
        }
    }
}

/// The kind of a MIDI message, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MidiKind {
    /// Note On.
    NoteOn,
    /// Note Off.
    NoteOff,
    /// Control Change.
    ControlChange,
    /// Program Change.
    ProgramChange,
    /// 14-bit Pitch Bend.
    PitchBend,
    /// Channel (mono) aftertouch.
    ChannelAftertouch,
    /// Polyphonic (per-note) aftertouch.
    PolyAftertouch,
    /// Any system realtime message.
    Realtime,
}

impl MidiKind {
    /// The raw value range carried by messages of this kind.
    ///
    /// Seven-bit kinds span `0..=127`, pitch bend spans `0..=16383`.
    /// Realtime messages carry no value and return `None`.
    pub fn raw_range(self) -> Option<(u16, u16)> {
        match self {
            Self::PitchBend => Some((0, PITCH_BEND_MAX)),
            Self::Realtime => None,
            _ => Some((0, 127)),
        }
    }

    /// Whether a binding of this kind needs a note or controller number.
    ///
    /// Note On/Off bindings may omit the number, in which case they track
    /// the note number instead of velocity.
    pub fn requires_number(self) -> bool {
        matches!(self, Self::ControlChange | Self::PolyAftertouch)
    }
}

/// A decoded MIDI message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEvent {
    /// A key was pressed.
    NoteOn {
        /// Channel (0-15).
        channel: u8,
        /// Note number (0-127).
        note: u8,
        /// Velocity (0-127). A velocity of zero is a release by convention.
        velocity: u8,
    },
    /// A key was released.
    NoteOff {
        /// Channel (0-15).
        channel: u8,
        /// Note number (0-127).
        note: u8,
        /// Release velocity (0-127).
        velocity: u8,
    },
    /// A controller moved.
    ControlChange {
        /// Channel (0-15).
        channel: u8,
        /// Controller number (0-127).
        index: u8,
        /// Controller value (0-127).
        value: u8,
    },
    /// A program was selected.
    ProgramChange {
        /// Channel (0-15).
        channel: u8,
        /// Program number (0-127).
        program: u8,
    },
    /// The pitch wheel moved.
    PitchBend {
        /// Channel (0-15).
        channel: u8,
        /// Low seven bits.
        low: u8,
        /// High seven bits.
        high: u8,
    },
    /// Channel-wide pressure.
    ChannelAftertouch {
        /// Channel (0-15).
        channel: u8,
        /// Pressure (0-127).
        value: u8,
    },
    /// Per-note pressure.
    PolyAftertouch {
        /// Channel (0-15).
        channel: u8,
        /// Note number (0-127).
        note: u8,
        /// Pressure (0-127).
        value: u8,
    },
    /// A system realtime message.
    Realtime(Realtime),
}

impl MidiEvent {
    /// Build a pitch bend event from a 14-bit value.
    ///
    /// Values above [`PITCH_BEND_MAX`] are clamped.
    pub fn pitch_bend(channel: u8, value: u16) -> Self {
        let value = value.min(PITCH_BEND_MAX);
        Self::PitchBend {
            channel,
            low: (value & 0x7F) as u8,
            high: (value >> 7) as u8,
        }
    }

    /// The kind of this message.
    pub fn kind(&self) -> MidiKind {
        match self {
            Self::NoteOn { .. } => MidiKind::NoteOn,
            Self::NoteOff { .. } => MidiKind::NoteOff,
            Self::ControlChange { .. } => MidiKind::ControlChange,
            Self::ProgramChange { .. } => MidiKind::ProgramChange,
            Self::PitchBend { .. } => MidiKind::PitchBend,
            Self::ChannelAftertouch { .. } => MidiKind::ChannelAftertouch,
            Self::PolyAftertouch { .. } => MidiKind::PolyAftertouch,
            Self::Realtime(_) => MidiKind::Realtime,
        }
    }

    /// The channel of a channel message, `None` for realtime messages.
    pub fn channel(&self) -> Option<u8> {
        match *self {
            Self::NoteOn { channel, .. }
            | Self::NoteOff { channel, .. }
            | Self::ControlChange { channel, .. }
            | Self::ProgramChange { channel, .. }
            | Self::PitchBend { channel, .. }
            | Self::ChannelAftertouch { channel, .. }
            | Self::PolyAftertouch { channel, .. } => Some(channel),
            Self::Realtime(_) => None,
        }
    }

    /// The note or controller number addressed by this message, if any.
    pub fn number(&self) -> Option<u8> {
        match *self {
            Self::NoteOn { note, .. }
            | Self::NoteOff { note, .. }
            | Self::PolyAftertouch { note, .. } => Some(note),
            Self::ControlChange { index, .. } => Some(index),
            _ => None,
        }
    }

    /// The combined 14-bit value of a pitch bend message.
    ///
    /// `8192` is centered; `0` and `16383` are the extremes.
    pub fn bend_value(&self) -> Option<u16> {
        match *self {
            Self::PitchBend { low, high, .. } => Some(u16::from(high) * 128 + u16::from(low)),
            _ => None,
        }
    }

    /// Decode one complete MIDI message.
    ///
    /// Returns `None` for truncated input, out-of-range data bytes, running
    /// status, system common and system exclusive messages.
    ///
    /// # Example
    ///
    /// ```rust
    /// use legato_midi::MidiEvent;
    ///
    /// let event = MidiEvent::parse(&[0x91, 60, 100]).unwrap();
    /// assert_eq!(event, MidiEvent::NoteOn { channel: 1, note: 60, velocity: 100 });
    /// ```
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let (&status, data) = bytes.split_first()?;
        if status >= 0xF8 {
            return Realtime::from_status(status).map(Self::Realtime);
        }
        if !(0x80..0xF0).contains(&status) {
            return None;
        }

        let channel = status & 0x0F;
        let byte = |i: usize| data.get(i).copied().filter(|b| *b < 0x80);

        let event = match status & 0xF0 {
            0x80 => Self::NoteOff {
                channel,
                note: byte(0)?,
                velocity: byte(1)?,
            },
            0x90 => Self::NoteOn {
                channel,
                note: byte(0)?,
                velocity: byte(1)?,
            },
            0xA0 => Self::PolyAftertouch {
                channel,
                note: byte(0)?,
                value: byte(1)?,
            },
            0xB0 => Self::ControlChange {
                channel,
                index: byte(0)?,
                value: byte(1)?,
            },
            0xC0 => Self::ProgramChange {
                channel,
                program: byte(0)?,
            },
            0xD0 => Self::ChannelAftertouch {
                channel,
                value: byte(0)?,
            },
            0xE0 => Self::PitchBend {
                channel,
                low: byte(0)?,
                high: byte(1)?,
            },
            _ => return None,
        };
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_channel_messages() {
        assert_eq!(
            MidiEvent::parse(&[0x80, 64, 10]),
            Some(MidiEvent::NoteOff { channel: 0, note: 64, velocity: 10 })
        );
        assert_eq!(
            MidiEvent::parse(&[0xB3, 1, 127]),
            Some(MidiEvent::ControlChange { channel: 3, index: 1, value: 127 })
        );
        assert_eq!(
            MidiEvent::parse(&[0xCF, 5]),
            Some(MidiEvent::ProgramChange { channel: 15, program: 5 })
        );
        assert_eq!(
            MidiEvent::parse(&[0xD2, 99]),
            Some(MidiEvent::ChannelAftertouch { channel: 2, value: 99 })
        );
        assert_eq!(
            MidiEvent::parse(&[0xA0, 60, 30]),
            Some(MidiEvent::PolyAftertouch { channel: 0, note: 60, value: 30 })
        );
    }

    #[test]
    fn parses_pitch_bend() {
        let event = MidiEvent::parse(&[0xE0, 0x00, 0x40]).unwrap();
        assert_eq!(event.bend_value(), Some(PITCH_BEND_CENTER));
        assert_eq!(event.kind(), MidiKind::PitchBend);

        let top = MidiEvent::parse(&[0xE0, 0x7F, 0x7F]).unwrap();
        assert_eq!(top.bend_value(), Some(PITCH_BEND_MAX));
    }

    #[test]
    fn parses_realtime() {
        assert_eq!(
            MidiEvent::parse(&[0xF8]),
            Some(MidiEvent::Realtime(Realtime::Clock))
        );
        assert_eq!(
            MidiEvent::parse(&[0xFC]),
            Some(MidiEvent::Realtime(Realtime::Stop))
        );
        // Undefined realtime bytes
        assert_eq!(MidiEvent::parse(&[0xF9]), None);
        assert_eq!(MidiEvent::parse(&[0xFD]), None);
        assert_eq!(Realtime::Continue.status(), 0xFB);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(MidiEvent::parse(&[]), None);
        assert_eq!(MidiEvent::parse(&[0x90, 60]), None);
        assert_eq!(MidiEvent::parse(&[0x90, 60, 0x80]), None);
        assert_eq!(MidiEvent::parse(&[60, 100]), None);
        assert_eq!(MidiEvent::parse(&[0xF0, 0x7E, 0xF7]), None);
    }

    #[test]
    fn pitch_bend_constructor_splits_bits() {
        let event = MidiEvent::pitch_bend(4, 0x1234);
        assert_eq!(event, MidiEvent::PitchBend { channel: 4, low: 0x34, high: 0x24 });
        assert_eq!(event.bend_value(), Some(0x1234));
        assert_eq!(MidiEvent::pitch_bend(0, u16::MAX).bend_value(), Some(PITCH_BEND_MAX));
    }

    #[test]
    fn channel_and_number_accessors() {
        let cc = MidiEvent::ControlChange { channel: 9, index: 74, value: 0 };
        assert_eq!(cc.channel(), Some(9));
        assert_eq!(cc.number(), Some(74));

        let bend = MidiEvent::pitch_bend(1, 0);
        assert_eq!(bend.number(), None);
        assert_eq!(MidiEvent::Realtime(Realtime::Reset).channel(), None);
    }

    #[test]
    fn raw_ranges() {
        assert_eq!(MidiKind::ControlChange.raw_range(), Some((0, 127)));
        assert_eq!(MidiKind::NoteOn.raw_range(), Some((0, 127)));
        assert_eq!(MidiKind::PitchBend.raw_range(), Some((0, 16383)));
        assert_eq!(MidiKind::Realtime.raw_range(), None);
    }
}
