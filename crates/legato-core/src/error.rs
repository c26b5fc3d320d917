//! Construction-time errors for filter stages.

use thiserror::Error;

/// Errors raised when a filter stage is configured with unusable values.
///
/// These only occur at construction time. Once a stage exists, every
/// processing call is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Sample or update rate was zero, negative, or not finite.
    #[error("sample rate must be a positive number, got {0}")]
    InvalidSampleRate(f32),

    /// Filter cutoff was zero, negative, or not finite.
    #[error("cutoff frequency must be a positive number, got {0} Hz")]
    InvalidFrequency(f32),

    /// Slew rise or fall rate was NaN or infinite.
    #[error("slew rate must be finite, got {0}")]
    InvalidSlewRate(f32),
}

/// Validate a sample rate, returning it unchanged when usable.
pub(crate) fn check_rate(rate: f32) -> Result<f32, ConfigError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidSampleRate(rate))
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn rejects_non_positive_rates() {
        assert_eq!(check_rate(0.0), Err(ConfigError::InvalidSampleRate(0.0)));
        assert_eq!(check_rate(-1.0), Err(ConfigError::InvalidSampleRate(-1.0)));
        assert!(check_rate(f32::NAN).is_err());
        assert!(check_rate(f32::INFINITY).is_err());
        assert_eq!(check_rate(60.0), Ok(60.0));
    }

    #[test]
    fn display_mentions_value() {
        let msg = ConfigError::InvalidSampleRate(-3.0).to_string();
        assert_eq!(msg, "sample rate must be a positive number, got -3");

        let msg = ConfigError::InvalidFrequency(0.0).to_string();
        assert!(msg.contains("0 Hz"), "got: {msg}");

        let msg = ConfigError::InvalidSlewRate(f32::INFINITY).to_string();
        assert_eq!(msg, "slew rate must be finite, got inf");
    }
}
