//! Errors raised when building a MIDI-controlled parameter.

use legato_core::ConfigError;
use thiserror::Error;

use crate::event::MidiKind;

/// Errors that can occur when constructing a [`ControlParameter`](crate::ControlParameter).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    /// The update rate or smoothing cutoff was unusable.
    #[error("invalid smoothing configuration: {0}")]
    Config(#[from] ConfigError),

    /// The binding's message kind carries no value to follow.
    #[error("{0:?} messages carry no value and cannot drive a parameter")]
    UnsupportedEvent(MidiKind),

    /// The binding's message kind needs a note or controller number.
    #[error("{0:?} binding needs a note or controller number")]
    MissingIndex(MidiKind),

    /// The binding names a channel outside `0..=15`.
    #[error("MIDI channel must be 0-15, got {0}")]
    InvalidChannel(u8),

    /// The binding names a note or controller number above 127.
    #[error("note or controller number must be 0-127, got {0}")]
    InvalidIndex(u8),

    /// The output range has a non-finite endpoint.
    #[error("parameter range must have finite endpoints")]
    InvalidRange,
}
