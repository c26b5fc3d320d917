//! Velocity-limited signal follower (slew-rate limiter).
//!
//! The follower tracks its input, but its output may only rise or fall by a
//! bounded amount per sample:
//!
//! ```text
//! s = absolute ? |x[n]| : x[n]
//! y[n] = y[n-1] + max_rise   if s > y[n-1] + max_rise
//!      = y[n-1] - max_fall   if s < y[n-1] - max_fall
//!      = s                   otherwise
//! ```
//!
//! A signal whose per-sample change already stays within both bounds passes
//! through unaltered. Either bound may be disabled, letting the output jump
//! freely in that direction.
//!
//! Rates are specified in output units per second and converted to units per
//! sample at construction. Pass a rate of `1.0` to specify per-sample limits
//! directly.
//!
//! With `absolute` set the follower tracks `|x|`, which turns it into a linear
//! envelope follower. Applied to audio without `absolute` it behaves like an
//! analog slew limiter, with the nonlinear distortion that implies.
//!
//! # Example
//!
//! ```rust
//! use legato_core::{Filter, SlewLimiter};
//!
//! // Allow at most 0.25 per sample upward, unlimited downward.
//! let mut slew = SlewLimiter::new(1.0, Some(0.25), None, false).unwrap();
//!
//! let mut block = [1.0, 1.0, 1.0, 1.0, 1.0, 0.0];
//! slew.process_block_inplace(&mut block);
//! assert_eq!(block, [0.25, 0.5, 0.75, 1.0, 1.0, 0.0]);
//! ```

use crate::error::{ConfigError, check_rate};
use crate::filter::Filter;

/// Slew-rate limiter with independent rise and fall bounds.
///
/// # Invariants
///
/// - `max_rise` and `max_fall`, when present, are finite, non-negative and
///   stored in units per sample
/// - `sample_rate` is finite and positive
///
/// [`Filter::reset_to`] primes an absolute follower to `|v|`, its steady
/// state for a constant input `v`. Use [`set_state`](Self::set_state) to
/// store a value as given.
#[derive(Debug, Clone)]
pub struct SlewLimiter {
    sample_rate: f32,
    max_rise: Option<f32>,
    max_fall: Option<f32>,
    absolute: bool,
    state: f32,
}

impl SlewLimiter {
    /// Create a new slew limiter.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Rate at which samples are processed, in Hz
    /// * `max_rise` - Maximum upward rate in units per second, or `None` for
    ///   no limit. The sign is ignored.
    /// * `max_fall` - Maximum downward rate in units per second, or `None`
    ///   for no limit. The sign is ignored.
    /// * `absolute` - Follow `|input|` instead of the signed input
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSampleRate`] unless `sample_rate` is a
    /// finite positive number, and [`ConfigError::InvalidSlewRate`] for a NaN
    /// or infinite bound.
    pub fn new(
        sample_rate: f32,
        max_rise: Option<f32>,
        max_fall: Option<f32>,
        absolute: bool,
    ) -> Result<Self, ConfigError> {
        let sample_rate = check_rate(sample_rate)?;
        let max_rise = max_rise.map(check_slew).transpose()?.map(|r| r / sample_rate);
        let max_fall = max_fall.map(check_slew).transpose()?.map(|f| f / sample_rate);
        #[cfg(feature = "tracing")]
        tracing::debug!(sample_rate, ?max_rise, ?max_fall, absolute, "slew limiter created");
        Ok(Self {
            sample_rate,
            max_rise,
            max_fall,
            absolute,
            state: 0.0,
        })
    }

    /// The sample rate given at construction, in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Maximum rise per sample, if limited.
    pub fn max_rise(&self) -> Option<f32> {
        self.max_rise
    }

    /// Maximum fall per sample, if limited.
    pub fn max_fall(&self) -> Option<f32> {
        self.max_fall
    }

    /// Whether the follower tracks the absolute value of its input.
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Current output state (the most recent output sample).
    pub fn state(&self) -> f32 {
        self.state
    }

    /// Force the output state to `value`, even for an absolute follower.
    pub fn set_state(&mut self, value: f32) {
        self.state = value;
    }
}

fn check_slew(rate: f32) -> Result<f32, ConfigError> {
    if rate.is_finite() {
        Ok(rate.abs())
    } else {
        Err(ConfigError::InvalidSlewRate(rate))
    }
}

impl Filter for SlewLimiter {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let s = if self.absolute { input.abs() } else { input };

        self.state = match (self.max_rise, self.max_fall) {
            (Some(rise), _) if s > self.state + rise => self.state + rise,
            (_, Some(fall)) if s < self.state - fall => self.state - fall,
            _ => s,
        };
        self.state
    }

    /// Force the output state to `value`.
    ///
    /// For an absolute follower the steady state of a constant input `v` is
    /// `|v|`, so that is what gets stored and returned.
    fn reset_to(&mut self, value: f32) -> f32 {
        self.state = if self.absolute { value.abs() } else { value };
        self.state
    }
}
