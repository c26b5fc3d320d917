//! Which incoming MIDI messages drive a parameter.
//!
//! A [`MidiBinding`] is a message template: a kind, an optional channel, and
//! an optional note or controller number. Events that match the template
//! yield a raw value taken from the field that kind carries:
//!
//! | Binding | Raw value |
//! |---------|-----------|
//! | Note On/Off with a note | velocity of any note |
//! | Note On/Off without a note | note number of any note |
//! | Control Change | controller value |
//! | Pitch Bend | 14-bit bend (`high * 128 + low`) |
//! | Channel aftertouch | pressure |
//! | Poly aftertouch | pressure on that note |
//! | Program Change | program number |

use alloc::format;
use alloc::string::String;

use crate::cc;
use crate::event::{MidiEvent, MidiKind};

/// Template describing the messages a parameter listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MidiBinding {
    kind: MidiKind,
    channel: Option<u8>,
    number: Option<u8>,
}

impl MidiBinding {
    /// Build a binding from its parts.
    ///
    /// `channel: None` listens on every channel. `number` is the note or
    /// controller number, where the kind has one.
    pub const fn new(kind: MidiKind, channel: Option<u8>, number: Option<u8>) -> Self {
        Self {
            kind,
            channel,
            number,
        }
    }

    /// Follow a controller's value.
    pub const fn control_change(index: u8) -> Self {
        Self::new(MidiKind::ControlChange, None, Some(index))
    }

    /// Follow note velocity.
    ///
    /// `note` only selects velocity over note number as the raw value; notes
    /// other than `note` update the parameter too.
    pub const fn note_velocity(note: u8) -> Self {
        Self::new(MidiKind::NoteOn, None, Some(note))
    }

    /// Follow the note number of whichever note is played.
    pub const fn note_number() -> Self {
        Self::new(MidiKind::NoteOn, None, None)
    }

    /// Follow the pitch wheel.
    pub const fn pitch_bend() -> Self {
        Self::new(MidiKind::PitchBend, None, None)
    }

    /// Follow channel pressure.
    pub const fn channel_aftertouch() -> Self {
        Self::new(MidiKind::ChannelAftertouch, None, None)
    }

    /// Follow the pressure on one note.
    pub const fn poly_aftertouch(note: u8) -> Self {
        Self::new(MidiKind::PolyAftertouch, None, Some(note))
    }

    /// Follow program changes.
    pub const fn program_change() -> Self {
        Self::new(MidiKind::ProgramChange, None, None)
    }

    /// The same template restricted to one channel.
    pub const fn on_channel(mut self, channel: u8) -> Self {
        self.channel = Some(channel);
        self
    }

    /// The same template listening on every channel.
    pub const fn any_channel(mut self) -> Self {
        self.channel = None;
        self
    }

    /// Use an example message as the template.
    ///
    /// The event's kind, channel and note or controller number are kept; its
    /// value fields are ignored. A note event therefore produces a
    /// velocity binding.
    pub fn from_event(event: &MidiEvent) -> Self {
        Self::new(event.kind(), event.channel(), event.number())
    }

    /// Message kind this binding listens to.
    pub fn kind(&self) -> MidiKind {
        self.kind
    }

    /// Channel filter, `None` for every channel.
    pub fn channel(&self) -> Option<u8> {
        self.channel
    }

    /// Note or controller number, if the binding names one.
    pub fn number(&self) -> Option<u8> {
        self.number
    }

    /// Raw value range of matching messages, `None` if the kind has no value.
    pub fn raw_range(&self) -> Option<(u16, u16)> {
        self.kind.raw_range()
    }

    /// Extract the raw value from a matching event.
    ///
    /// Returns `None` when the event's kind or channel differs from the
    /// template, or when a control change or poly aftertouch event carries
    /// a different controller or note.
    pub fn raw_value(&self, event: &MidiEvent) -> Option<u16> {
        if event.kind() != self.kind {
            return None;
        }
        if self.channel.is_some_and(|c| event.channel() != Some(c)) {
            return None;
        }

        let value = match *event {
            MidiEvent::NoteOn { note, velocity, .. } | MidiEvent::NoteOff { note, velocity, .. } => {
                if self.number.is_some() {
                    velocity
                } else {
                    note
                }
            }
            MidiEvent::ControlChange { index, value, .. } => {
                if self.number != Some(index) {
                    return None;
                }
                value
            }
            MidiEvent::PolyAftertouch { note, value, .. } => {
                if self.number != Some(note) {
                    return None;
                }
                value
            }
            MidiEvent::ChannelAftertouch { value, .. } => value,
            MidiEvent::ProgramChange { program, .. } => program,
            MidiEvent::PitchBend { .. } => return event.bend_value(),
            MidiEvent::Realtime(_) => return None,
        };
        Some(u16::from(value))
    }

    /// Human-readable default description.
    ///
    /// # Example
    ///
    /// ```rust
    /// use legato_midi::{MidiBinding, cc};
    ///
    /// assert_eq!(MidiBinding::control_change(cc::MOD_WHEEL).description(), "CC 1 (Modulation Wheel)");
    /// assert_eq!(MidiBinding::note_velocity(60).description(), "Note 60 Velocity");
    /// ```
    pub fn description(&self) -> String {
        match (self.kind, self.number) {
            (MidiKind::NoteOn | MidiKind::NoteOff, Some(note)) => format!("Note {note} Velocity"),
            (MidiKind::NoteOn | MidiKind::NoteOff, None) => String::from("Note Number"),
            (MidiKind::ControlChange, Some(index)) => match cc::name(index) {
                Some(name) => format!("CC {index} ({name})"),
                None => format!("CC {index}"),
            },
            (MidiKind::ControlChange, None) => String::from("Control Change"),
            (MidiKind::PitchBend, _) => String::from("Pitch Bend"),
            (MidiKind::ChannelAftertouch, _) => String::from("Aftertouch"),
            (MidiKind::PolyAftertouch, _) => String::from("Polyphonic Aftertouch"),
            (MidiKind::ProgramChange, _) => String::from("Program Change"),
            (MidiKind::Realtime, _) => String::from("Realtime"),
        }
    }
}
