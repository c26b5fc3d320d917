//! One `[[parameters]]` entry of a patch.

use serde::{Deserialize, Serialize};

use legato_midi::{
    ControlParameter, DEFAULT_FILTER_HZ, MidiBinding, MidiKind, ParameterOptions,
};

use crate::error::PatchError;

/// A MIDI-controlled parameter as written in a patch file.
///
/// # TOML Format
///
/// ```toml
/// [[parameters]]
/// name = "cutoff"
/// kind = "control_change"
/// channel = 0            # optional, absent listens on every channel
/// number = 74            # controller or note number, where the kind has one
/// range = [200.0, 8000.0]
/// default = 1000.0
/// max_rise = 4000.0      # optional, units per second
/// max_fall = 4000.0      # optional, units per second
/// filter_hz = 15.0
/// description = "Filter cutoff"
/// ```
///
/// `kind` is one of `note_on`, `note_off`, `control_change`,
/// `program_change`, `pitch_bend`, `channel_aftertouch`, `poly_aftertouch`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterConfig {
    /// Name used to look the parameter up.
    pub name: String,

    /// Message kind that drives the parameter.
    pub kind: MidiKind,

    /// Channel filter (0-15). Absent means every channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<u8>,

    /// Controller or note number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u8>,

    /// Output range as `[start, end]`.
    #[serde(default = "default_range")]
    pub range: (f32, f32),

    /// Initial value; the start of `range` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<f32>,

    /// Maximum rise per second; a full-range jump per update when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rise: Option<f32>,

    /// Maximum fall per second; a full-range jump per update when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fall: Option<f32>,

    /// Smoothing low-pass cutoff in Hz.
    #[serde(default = "default_filter_hz")]
    pub filter_hz: f32,

    /// Description; derived from the binding when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_range() -> (f32, f32) {
    (0.0, 1.0)
}

fn default_filter_hz() -> f32 {
    DEFAULT_FILTER_HZ
}

impl ParameterConfig {
    /// Create an entry with default range and smoothing.
    pub fn new(name: impl Into<String>, kind: MidiKind) -> Self {
        Self {
            name: name.into(),
            kind,
            channel: None,
            number: None,
            range: default_range(),
            default: None,
            max_rise: None,
            max_fall: None,
            filter_hz: DEFAULT_FILTER_HZ,
            description: None,
        }
    }

    /// Create an entry matching an existing binding.
    pub fn from_binding(name: impl Into<String>, binding: &MidiBinding) -> Self {
        let mut config = Self::new(name, binding.kind());
        config.channel = binding.channel();
        config.number = binding.number();
        config
    }

    /// Set the controller or note number.
    pub fn with_number(mut self, number: u8) -> Self {
        self.number = Some(number);
        self
    }

    /// Listen on one channel only.
    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Set the output range.
    pub fn with_range(mut self, start: f32, end: f32) -> Self {
        self.range = (start, end);
        self
    }

    /// Set the initial value.
    pub fn with_default(mut self, value: f32) -> Self {
        self.default = Some(value);
        self
    }

    /// Limit rise and fall rates, in units per second.
    pub fn with_rates(mut self, max_rise: f32, max_fall: f32) -> Self {
        self.max_rise = Some(max_rise);
        self.max_fall = Some(max_fall);
        self
    }

    /// Set the smoothing cutoff.
    pub fn with_filter_hz(mut self, hz: f32) -> Self {
        self.filter_hz = hz;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The message template described by this entry.
    pub fn binding(&self) -> MidiBinding {
        MidiBinding::new(self.kind, self.channel, self.number)
    }

    /// Construction options at the given update rate.
    pub fn options(&self, update_rate: f32) -> ParameterOptions {
        ParameterOptions {
            range: self.range,
            default: self.default,
            max_rise: self.max_rise,
            max_fall: self.max_fall,
            filter_hz: self.filter_hz,
            update_rate,
            description: self.description.clone(),
        }
    }

    /// Build the parameter, ticking at `update_rate`.
    pub fn build(&self, update_rate: f32) -> Result<ControlParameter, PatchError> {
        ControlParameter::new(self.binding(), self.options(update_rate))
            .map_err(|e| PatchError::parameter(&self.name, e))
    }
}
