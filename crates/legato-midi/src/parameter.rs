//! Smoothed, MIDI-controlled parameter.
//!
//! A [`ControlParameter`] listens for one kind of MIDI message, maps the
//! message's raw value onto an output range, and smooths the result so that
//! stepped controller input becomes a continuous control signal. Smoothing
//! runs once per call to [`advance`](ControlParameter::advance), which is
//! expected at the configured update rate (typically the UI or control-block
//! rate, 60 Hz by default).
//!
//! The smoothing path is a [`SlewLimiter`] followed by a [`OnePole`] low-pass.
//! With the default rise and fall limits a full-range jump is allowed in a
//! single update, so only the low-pass shapes the response.
//!
//! # Example
//!
//! ```rust
//! use legato_midi::{ControlParameter, MidiBinding, MidiEvent, ParameterOptions, cc};
//!
//! let mut cutoff = ControlParameter::new(
//!     MidiBinding::control_change(cc::BRIGHTNESS),
//!     ParameterOptions::default().with_range(200.0, 8000.0),
//! )
//! .unwrap();
//!
//! cutoff.notify(&MidiEvent::ControlChange { channel: 0, index: cc::BRIGHTNESS, value: 127 });
//! assert_eq!(cutoff.target(), 8000.0);
//!
//! // Approaches the target over several updates.
//! let first = cutoff.advance();
//! assert!(first > 200.0 && first < 8000.0);
//! ```

use alloc::string::String;

use legato_core::{Chain, Filter, FilterExt, OnePole, SlewLimiter, clamp_to, ordered, scale};

use crate::binding::MidiBinding;
use crate::error::ParameterError;
use crate::event::MidiEvent;

/// Default low-pass cutoff applied after slew limiting, in Hz.
pub const DEFAULT_FILTER_HZ: f32 = 15.0;

/// Default number of [`ControlParameter::advance`] calls per second.
pub const DEFAULT_UPDATE_RATE: f32 = 60.0;

/// Construction options for a [`ControlParameter`].
///
/// Every field has a default; see [`ParameterOptions::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterOptions {
    /// Output range as `(start, end)`. The raw minimum maps to `start` and
    /// the raw maximum to `end`, so a reversed range inverts the control.
    pub range: (f32, f32),

    /// Initial output value. `None` uses the start of `range`.
    pub default: Option<f32>,

    /// Maximum increase per second, in output units. `None` allows a
    /// full-range jump in one update.
    pub max_rise: Option<f32>,

    /// Maximum decrease per second, in output units. `None` allows a
    /// full-range jump in one update.
    pub max_fall: Option<f32>,

    /// Low-pass cutoff in Hz.
    pub filter_hz: f32,

    /// Expected calls to `advance` per second.
    pub update_rate: f32,

    /// Description override. `None` derives one from the binding.
    pub description: Option<String>,
}

impl Default for ParameterOptions {
    fn default() -> Self {
        Self {
            range: (0.0, 1.0),
            default: None,
            max_rise: None,
            max_fall: None,
            filter_hz: DEFAULT_FILTER_HZ,
            update_rate: DEFAULT_UPDATE_RATE,
            description: None,
        }
    }
}

impl ParameterOptions {
    /// Set the output range.
    pub fn with_range(mut self, start: f32, end: f32) -> Self {
        self.range = (start, end);
        self
    }

    /// Set the initial output value.
    pub fn with_default(mut self, value: f32) -> Self {
        self.default = Some(value);
        self
    }

    /// Limit how fast the output may rise, in units per second.
    pub fn with_max_rise(mut self, per_second: f32) -> Self {
        self.max_rise = Some(per_second);
        self
    }

    /// Limit how fast the output may fall, in units per second.
    pub fn with_max_fall(mut self, per_second: f32) -> Self {
        self.max_fall = Some(per_second);
        self
    }

    /// Set the low-pass cutoff.
    pub fn with_filter_hz(mut self, hz: f32) -> Self {
        self.filter_hz = hz;
        self
    }

    /// Set the expected update rate.
    pub fn with_update_rate(mut self, rate: f32) -> Self {
        self.update_rate = rate;
        self
    }

    /// Override the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A MIDI-controlled parameter with slew limiting and low-pass smoothing.
///
/// # Invariants
///
/// - `target()` and `last_value()` always lie within the output range
/// - `raw_value()` always lies within the binding's raw range
/// - events that do not match the binding leave all state untouched
#[derive(Debug, Clone)]
pub struct ControlParameter {
    binding: MidiBinding,
    range: (f32, f32),
    bounds: (f32, f32),
    raw_range: (f32, f32),
    default: f32,
    raw_default: f32,
    update_rate: f32,
    description: String,
    smoother: Chain<SlewLimiter, OnePole>,
    raw_value: f32,
    target: f32,
    last_value: f32,
}

impl ControlParameter {
    /// Create a parameter driven by messages matching `binding`.
    ///
    /// The parameter starts settled at its default value, as if
    /// [`reset`](Self::reset) had been called.
    ///
    /// # Errors
    ///
    /// - [`ParameterError::UnsupportedEvent`] if the binding's kind carries no value
    /// - [`ParameterError::MissingIndex`] for a control change or poly
    ///   aftertouch binding without a number
    /// - [`ParameterError::InvalidChannel`] / [`ParameterError::InvalidIndex`]
    ///   for out-of-range binding fields
    /// - [`ParameterError::InvalidRange`] if the output range is not finite
    /// - [`ParameterError::Config`] for an unusable update rate or cutoff
    pub fn new(binding: MidiBinding, options: ParameterOptions) -> Result<Self, ParameterError> {
        let kind = binding.kind();
        let (raw_lo, raw_hi) = binding
            .raw_range()
            .ok_or(ParameterError::UnsupportedEvent(kind))?;
        if kind.requires_number() && binding.number().is_none() {
            return Err(ParameterError::MissingIndex(kind));
        }
        if let Some(channel) = binding.channel().filter(|c| *c > 15) {
            return Err(ParameterError::InvalidChannel(channel));
        }
        if let Some(number) = binding.number().filter(|n| *n > 127) {
            return Err(ParameterError::InvalidIndex(number));
        }

        let range = options.range;
        if !(range.0.is_finite() && range.1.is_finite()) {
            return Err(ParameterError::InvalidRange);
        }
        let bounds = ordered(range);

        // Defaults allow a full-range jump in a single update.
        let full_scale = (bounds.1 - bounds.0) * options.update_rate;
        let slew = SlewLimiter::new(
            options.update_rate,
            Some(options.max_rise.unwrap_or(full_scale)),
            Some(options.max_fall.unwrap_or(full_scale)),
            false,
        )?;
        let lowpass = OnePole::new(options.update_rate, options.filter_hz)?;

        let raw_range = (f32::from(raw_lo), f32::from(raw_hi));
        let default = clamp_to(options.default.unwrap_or(range.0), bounds);
        let raw_default = libm::roundf(scale(default, range, raw_range));
        let description = options
            .description
            .unwrap_or_else(|| binding.description());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            description = %description,
            ?range,
            default,
            raw_default,
            update_rate = options.update_rate,
            filter_hz = options.filter_hz,
            "control parameter created"
        );

        let mut parameter = Self {
            binding,
            range,
            bounds,
            raw_range,
            default,
            raw_default,
            update_rate: options.update_rate,
            description,
            smoother: slew.chain(lowpass),
            raw_value: raw_default,
            target: default,
            last_value: default,
        };
        parameter.reset();
        Ok(parameter)
    }

    /// Feed an incoming MIDI event.
    ///
    /// Matching events update the raw value and the smoothing target.
    /// Data bytes outside the kind's raw domain (only possible in events
    /// built by hand) are clamped into it. Returns whether the event matched.
    pub fn notify(&mut self, event: &MidiEvent) -> bool {
        let Some(raw) = self.binding.raw_value(event) else {
            return false;
        };
        self.raw_value = clamp_to(f32::from(raw), self.raw_range);
        self.target = clamp_to(scale(self.raw_value, self.raw_range, self.range), self.bounds);
        true
    }

    /// Set the smoothing target directly, bypassing MIDI.
    ///
    /// The value is clamped to the output range, and the raw value is
    /// derived back from it. The output still approaches the new target
    /// through the smoothing path.
    pub fn set_target(&mut self, value: f32) {
        self.target = clamp_to(value, self.bounds);
        self.raw_value = scale(self.target, self.range, self.raw_range);
    }

    /// Jump to `value` with no smoothing lag.
    ///
    /// The value is clamped to the output range, the smoothing state is
    /// primed so that the next [`advance`](Self::advance) returns it
    /// unchanged, and the clamped value is returned.
    pub fn reset_to(&mut self, value: f32) -> f32 {
        let value = clamp_to(value, self.bounds);
        self.smoother.reset_to(value);
        self.target = value;
        self.raw_value = libm::roundf(scale(value, self.range, self.raw_range));
        self.last_value = value;
        value
    }

    /// Jump to the default value with no smoothing lag.
    pub fn reset(&mut self) -> f32 {
        self.reset_to(self.default)
    }

    /// Run one smoothing update and return the new output value.
    ///
    /// Call this at the configured update rate.
    pub fn advance(&mut self) -> f32 {
        self.last_value = clamp_to(self.smoother.process(self.target), self.bounds);
        self.last_value
    }

    /// Most recent output of [`advance`](Self::advance), without updating.
    pub fn last_value(&self) -> f32 {
        self.last_value
    }

    /// Current smoothing target, in output units.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Most recent raw MIDI value, or the one derived from the last direct set.
    pub fn raw_value(&self) -> f32 {
        self.raw_value
    }

    /// The message template this parameter listens to.
    pub fn binding(&self) -> &MidiBinding {
        &self.binding
    }

    /// Output range as given at construction.
    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    /// Raw value range of the bound message kind.
    pub fn raw_range(&self) -> (f32, f32) {
        self.raw_range
    }

    /// Default output value.
    pub fn default_value(&self) -> f32 {
        self.default
    }

    /// Default value in the raw domain, rounded to a whole step.
    pub fn raw_default(&self) -> f32 {
        self.raw_default
    }

    /// Expected update rate in Hz.
    pub fn update_rate(&self) -> f32 {
        self.update_rate
    }

    /// Maximum rise per second, in output units.
    pub fn max_rise(&self) -> f32 {
        self.smoother.first().max_rise().unwrap_or(f32::INFINITY) * self.update_rate
    }

    /// Maximum fall per second, in output units.
    pub fn max_fall(&self) -> f32 {
        self.smoother.first().max_fall().unwrap_or(f32::INFINITY) * self.update_rate
    }

    /// Low-pass cutoff in Hz.
    pub fn filter_hz(&self) -> f32 {
        self.smoother.second().frequency()
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MidiKind;
    use legato_core::ConfigError;

    fn cc(channel: u8, index: u8, value: u8) -> MidiEvent {
        MidiEvent::ControlChange {
            channel,
            index,
            value,
        }
    }

    fn mod_wheel() -> ControlParameter {
        ControlParameter::new(MidiBinding::control_change(1), ParameterOptions::default()).unwrap()
    }

    #[test]
    fn starts_at_default() {
        let p = ControlParameter::new(
            MidiBinding::control_change(7),
            ParameterOptions::default()
                .with_range(-10.0, 10.0)
                .with_default(0.0),
        )
        .unwrap();
        assert_eq!(p.last_value(), 0.0);
        assert_eq!(p.target(), 0.0);
        assert_eq!(p.raw_default(), 64.0);
        assert_eq!(p.raw_value(), 64.0);
    }

    #[test]
    fn default_is_range_start() {
        let p = ControlParameter::new(
            MidiBinding::pitch_bend(),
            ParameterOptions::default().with_range(1.0, -1.0),
        )
        .unwrap();
        assert_eq!(p.default_value(), 1.0);
        assert_eq!(p.raw_default(), 0.0);
        assert_eq!(p.raw_range(), (0.0, 16383.0));
    }

    #[test]
    fn default_rates_allow_full_range_jump() {
        let p = ControlParameter::new(
            MidiBinding::control_change(1),
            ParameterOptions::default().with_range(0.0, 2.0),
        )
        .unwrap();
        assert!((p.max_rise() - 120.0).abs() < 1e-3);
        assert!((p.max_fall() - 120.0).abs() < 1e-3);
        assert_eq!(p.filter_hz(), 15.0);
        assert_eq!(p.update_rate(), 60.0);
    }

    #[test]
    fn notify_clamps_out_of_domain_bytes() {
        let mut p = mod_wheel();
        assert!(p.notify(&cc(0, 1, 200)));
        assert_eq!(p.raw_value(), 127.0);
        assert_eq!(p.target(), 1.0);

        let mut bend = ControlParameter::new(
            MidiBinding::pitch_bend(),
            ParameterOptions::default().with_range(-2.0, 2.0),
        )
        .unwrap();
        assert!(bend.notify(&MidiEvent::PitchBend {
            channel: 0,
            low: 255,
            high: 255,
        }));
        assert_eq!(bend.raw_value(), 16383.0);
        assert_eq!(bend.target(), 2.0);
    }

    #[test]
    fn notify_maps_raw_value() {
        let mut p = mod_wheel();
        assert!(p.notify(&cc(0, 1, 127)));
        assert_eq!(p.raw_value(), 127.0);
        assert_eq!(p.target(), 1.0);

        assert!(!p.notify(&cc(0, 2, 0)));
        assert_eq!(p.raw_value(), 127.0);
    }

    #[test]
    fn advance_approaches_target_monotonically() {
        let mut p = mod_wheel();
        p.notify(&cc(0, 1, 127));
        let mut prev = p.last_value();
        for _ in 0..60 {
            let v = p.advance();
            assert!(v >= prev && v <= 1.0);
            prev = v;
        }
        assert!((prev - 1.0).abs() < 1e-4);
        assert_eq!(p.last_value(), prev);
    }

    #[test]
    fn set_target_clamps_and_back_derives_raw() {
        let mut p = mod_wheel();
        p.set_target(5.0);
        assert_eq!(p.target(), 1.0);
        assert_eq!(p.raw_value(), 127.0);

        p.set_target(0.5);
        assert!((p.raw_value() - 63.5).abs() < 1e-4);
    }

    #[test]
    fn reset_to_has_no_lag() {
        let mut p = mod_wheel();
        assert_eq!(p.reset_to(0.75), 0.75);
        assert_eq!(p.advance(), 0.75);
        assert_eq!(p.reset_to(-1.0), 0.0);
        assert_eq!(p.advance(), 0.0);
    }

    #[test]
    fn description_defaults_and_override() {
        assert_eq!(mod_wheel().description(), "CC 1 (Modulation Wheel)");
        let p = ControlParameter::new(
            MidiBinding::control_change(1),
            ParameterOptions::default().with_description("Vibrato"),
        )
        .unwrap();
        assert_eq!(p.description(), "Vibrato");
    }

    #[test]
    fn construction_errors() {
        let realtime = MidiBinding::new(MidiKind::Realtime, None, None);
        assert_eq!(
            ControlParameter::new(realtime, ParameterOptions::default()).unwrap_err(),
            ParameterError::UnsupportedEvent(MidiKind::Realtime)
        );

        let no_index = MidiBinding::new(MidiKind::ControlChange, None, None);
        assert_eq!(
            ControlParameter::new(no_index, ParameterOptions::default()).unwrap_err(),
            ParameterError::MissingIndex(MidiKind::ControlChange)
        );

        let bad_channel = MidiBinding::control_change(1).on_channel(16);
        assert_eq!(
            ControlParameter::new(bad_channel, ParameterOptions::default()).unwrap_err(),
            ParameterError::InvalidChannel(16)
        );

        let bad_rate = ParameterOptions::default().with_update_rate(0.0);
        assert_eq!(
            ControlParameter::new(MidiBinding::pitch_bend(), bad_rate).unwrap_err(),
            ParameterError::Config(ConfigError::InvalidSampleRate(0.0))
        );

        let bad_range = ParameterOptions::default().with_range(0.0, f32::NAN);
        assert_eq!(
            ControlParameter::new(MidiBinding::pitch_bend(), bad_range).unwrap_err(),
            ParameterError::InvalidRange
        );

        let nan_rise = ParameterOptions::default().with_max_rise(f32::NAN);
        assert!(matches!(
            ControlParameter::new(MidiBinding::pitch_bend(), nan_rise),
            Err(ParameterError::Config(ConfigError::InvalidSlewRate(r))) if r.is_nan()
        ));

        let endless_fall = ParameterOptions::default().with_max_fall(f32::INFINITY);
        assert_eq!(
            ControlParameter::new(MidiBinding::pitch_bend(), endless_fall).unwrap_err(),
            ParameterError::Config(ConfigError::InvalidSlewRate(f32::INFINITY))
        );
    }
}
