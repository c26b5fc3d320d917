//! Single-pole low-pass used as the last smoothing stage of a parameter.
//!
//! Each step moves the state a fixed fraction of the way toward the input:
//! `state += (1 - c) * (input - state)` with `c = exp(-2π * cutoff / rate)`.
//! The response to a step is a plain exponential, so a control value never
//! overshoots its target.
//!
//! ```rust
//! use legato_core::{Filter, OnePole};
//!
//! // 15 Hz cutoff ticked 60 times a second.
//! let mut lp = OnePole::new(60.0, 15.0).unwrap();
//! let first = lp.process(1.0);
//! assert!(first > 0.7 && first < 0.8);
//! ```

use crate::error::{ConfigError, check_rate};
use crate::filter::Filter;
use crate::math::flush_denormal;
use libm::expf;

/// One-pole low-pass. The coefficient stays in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct OnePole {
    state: f32,
    coeff: f32,
    sample_rate: f32,
    freq: f32,
}

impl OnePole {
    /// Low-pass at `freq_hz`, processed `sample_rate` times per second.
    ///
    /// # Errors
    ///
    /// Fails when either argument is not a finite positive number.
    pub fn new(sample_rate: f32, freq_hz: f32) -> Result<Self, ConfigError> {
        let sample_rate = check_rate(sample_rate)?;
        check_frequency(freq_hz)?;
        Ok(Self {
            state: 0.0,
            coeff: coefficient_for(freq_hz, sample_rate),
            sample_rate,
            freq: freq_hz,
        })
    }

    /// Move the cutoff. The state is kept.
    pub fn set_frequency(&mut self, freq_hz: f32) -> Result<(), ConfigError> {
        self.freq = check_frequency(freq_hz)?;
        self.coeff = coefficient_for(self.freq, self.sample_rate);
        Ok(())
    }

    /// Cutoff frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.freq
    }

    /// Feedback coefficient, `exp(-2π * freq / sample_rate)`.
    pub fn coefficient(&self) -> f32 {
        self.coeff
    }
}

fn coefficient_for(freq_hz: f32, sample_rate: f32) -> f32 {
    expf(-core::f32::consts::TAU * freq_hz / sample_rate)
}

fn check_frequency(freq_hz: f32) -> Result<f32, ConfigError> {
    if freq_hz.is_finite() && freq_hz > 0.0 {
        Ok(freq_hz)
    } else {
        Err(ConfigError::InvalidFrequency(freq_hz))
    }
}

impl Filter for OnePole {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        self.state = flush_denormal(input + self.coeff * (self.state - input));
        self.state
    }

    /// Prime with a constant input. A low-pass passes DC, so the steady state
    /// output equals `value`.
    fn reset_to(&mut self, value: f32) -> f32 {
        self.state = value;
        value
    }
}
